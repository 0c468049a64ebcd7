use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::{AssessmentSubmission, SubmissionId};
use super::intake::{IntakeGuard, IntakeRejection};
use super::questions::{catalogue, QuestionSpec};
use super::{AssessmentConfig, AssessmentReport, Assessor};

/// Service composing the intake guard with the assessment pipeline.
#[derive(Debug, Clone)]
pub struct AssessmentService {
    guard: Arc<IntakeGuard>,
    assessor: Arc<Assessor>,
}

static SUBMISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_submission_id() -> SubmissionId {
    let id = SUBMISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SubmissionId(format!("qh-{id:06}"))
}

/// A processed submission, stamped for the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub submission_id: SubmissionId,
    pub generated_at: DateTime<Utc>,
    pub report: AssessmentReport,
}

impl AssessmentService {
    pub fn new(config: AssessmentConfig) -> Self {
        Self::with_guard(IntakeGuard::default(), config)
    }

    pub fn with_guard(guard: IntakeGuard, config: AssessmentConfig) -> Self {
        Self {
            guard: Arc::new(guard),
            assessor: Arc::new(Assessor::new(config)),
        }
    }

    pub fn assessor(&self) -> &Assessor {
        &self.assessor
    }

    /// Validate the biometrics, then run the pipeline.
    pub fn submit(
        &self,
        submission: &AssessmentSubmission,
    ) -> Result<AssessmentRecord, IntakeRejection> {
        if let Err(rejection) = self.guard.validate(&submission.biometrics) {
            warn!(violations = rejection.violations.len(), %rejection, "submission rejected");
            return Err(rejection);
        }

        let submission_id = next_submission_id();
        let report = self
            .assessor
            .assess(&submission.biometrics, &submission.answers);

        info!(
            submission_id = %submission_id.0,
            overall = report.scores.overall,
            grade = report.scores.grade.label(),
            risk_flags = report.risk_flags.len(),
            fallbacks = report.scores.fallbacks.len(),
            "assessment completed"
        );

        Ok(AssessmentRecord {
            submission_id,
            generated_at: Utc::now(),
            report,
        })
    }

    pub fn questions(&self) -> Vec<QuestionSpec> {
        catalogue()
    }
}
