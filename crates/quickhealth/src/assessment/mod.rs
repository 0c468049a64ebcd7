//! Questionnaire assessment pipeline.
//!
//! Biometrics and answers flow one way through four stages: the indicator calculator, the
//! score engine, the risk evaluator and the advice generator. [`Assessor`] runs the stages as
//! a pure function; [`AssessmentService`] adds intake validation and logging in front of it.

pub mod advice;
pub mod domain;
pub mod indicators;
pub mod intake;
pub mod questions;
pub mod risk;
pub mod router;
pub mod scoring;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use advice::{generate_advice, Advice, AdviceContext, DEFAULT_ADVICE_LIMIT};
pub use domain::{
    AnswerSet, AssessmentSubmission, Biometrics, Gender, Response, SubmissionId, NEUTRAL_LEVEL,
};
pub use indicators::{BmiCategory, Indicators};
pub use intake::{IntakeGuard, IntakePolicy, IntakeRejection, IntakeViolation};
pub use questions::{catalogue, Label, Leveled, Question, QuestionKey, QuestionSpec};
pub use risk::{evaluate_risks, RiskFlag};
pub use router::assessment_router;
pub use scoring::{HealthGrade, ScoreComponent, ScoreEngine, ScoreResult, ScoringConfig};
pub use service::AssessmentService;
pub use views::AssessmentView;

use serde::{Deserialize, Serialize};

/// Policy knobs for the whole pipeline. `Default` is the published policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssessmentConfig {
    pub scoring: ScoringConfig,
    pub advice_limit: usize,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            advice_limit: DEFAULT_ADVICE_LIMIT,
        }
    }
}

/// Everything derived from one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub indicators: Indicators,
    pub scores: ScoreResult,
    pub risk_flags: Vec<RiskFlag>,
    pub advice: Vec<Advice>,
}

impl AssessmentReport {
    /// True when no risk rule fired; callers present this as "no major risk indicated".
    pub fn is_risk_free(&self) -> bool {
        self.risk_flags.is_empty()
    }
}

/// Stateless pipeline applying an [`AssessmentConfig`] to one submission.
#[derive(Debug, Clone)]
pub struct Assessor {
    engine: ScoreEngine,
    advice_limit: usize,
}

impl Default for Assessor {
    fn default() -> Self {
        Self::new(AssessmentConfig::default())
    }
}

impl Assessor {
    pub fn new(config: AssessmentConfig) -> Self {
        Self {
            engine: ScoreEngine::new(config.scoring),
            advice_limit: config.advice_limit,
        }
    }

    pub fn engine(&self) -> &ScoreEngine {
        &self.engine
    }

    pub fn assess(&self, biometrics: &Biometrics, answers: &AnswerSet) -> AssessmentReport {
        let indicators = Indicators::compute(biometrics, answers);
        let scores = self.engine.score(answers);
        let risk_flags = evaluate_risks(answers, indicators.bmi);
        let advice = generate_advice(
            &AdviceContext {
                answers,
                bmi: indicators.bmi,
                score: &scores,
                flags: &risk_flags,
            },
            self.advice_limit,
        );

        AssessmentReport {
            indicators,
            scores,
            risk_flags,
            advice,
        }
    }
}

/// Run the pipeline with the published policy.
pub fn assess(biometrics: &Biometrics, answers: &AnswerSet) -> AssessmentReport {
    Assessor::default().assess(biometrics, answers)
}
