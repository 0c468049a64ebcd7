mod config;
mod rules;

pub use config::{
    ActivityWeights, CategoryWeights, DietWeights, MentalPolicy, ScoringConfig, SleepWeights,
    ACTIVITY_WEIGHT, DAILY_STEPS_WEIGHT, DIET_WEIGHT, EXERCISE_FREQUENCY_WEIGHT,
    FALLBACK_SUB_SCORE, FAST_FOOD_WEIGHT, LAST_MEAL_GAP_WEIGHT, MEAL_FREQUENCY_WEIGHT,
    MENTAL_BASELINE, MENTAL_WEIGHT, MOOD_STEP, SCREEN_TIME_WEIGHT, SLEEP_CONSISTENCY_WEIGHT,
    SLEEP_DURATION_WEIGHT, SLEEP_WEIGHT, STRESS_STEP, SWEET_DRINKS_WEIGHT,
    VEGETABLES_FRUIT_WEIGHT, WAKE_CONDITION_WEIGHT, WATER_INTAKE_WEIGHT, WEIGHT_SUM_TOLERANCE,
};

use super::domain::AnswerSet;
use super::questions::QuestionKey;
use serde::{Deserialize, Serialize};

pub const GOOD_GRADE_FLOOR: u8 = 75;
pub const FAIR_GRADE_FLOOR: u8 = 45;

/// Stateless engine applying a scoring policy to an answer set.
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    config: ScoringConfig,
}

impl ScoreEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, answers: &AnswerSet) -> ScoreResult {
        let (components, categories) = rules::score_answers(answers, &self.config);
        let overall = rules::overall_score(&categories, &self.config);

        let fallbacks = components
            .iter()
            .filter(|component| component.fallback)
            .map(|component| component.question)
            .collect();

        ScoreResult {
            diet: categories.diet,
            sleep: categories.sleep,
            activity: categories.activity,
            mental: categories.mental,
            overall,
            grade: HealthGrade::from_overall(overall),
            components,
            fallbacks,
        }
    }
}

/// Sub-score assigned to one answer, kept for transparent breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub question: QuestionKey,
    pub label: String,
    pub score: u8,
    pub fallback: bool,
}

/// Coarse reading of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthGrade {
    Good,
    Fair,
    Poor,
}

impl HealthGrade {
    pub fn from_overall(overall: u8) -> Self {
        if overall >= GOOD_GRADE_FLOOR {
            HealthGrade::Good
        } else if overall >= FAIR_GRADE_FLOOR {
            HealthGrade::Fair
        } else {
            HealthGrade::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            HealthGrade::Good => "Good",
            HealthGrade::Fair => "Fair",
            HealthGrade::Poor => "Poor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub diet: u8,
    pub sleep: u8,
    pub activity: u8,
    pub mental: u8,
    pub overall: u8,
    pub grade: HealthGrade,
    /// One entry per answer, in questionnaire order.
    pub components: Vec<ScoreComponent>,
    /// Questions whose answer was unrecognized and scored with the fallback value.
    pub fallbacks: Vec<QuestionKey>,
}

impl ScoreResult {
    pub fn component(&self, question: QuestionKey) -> Option<&ScoreComponent> {
        self.components
            .iter()
            .find(|component| component.question == question)
    }
}
