use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::AssessmentSubmission;
use super::service::AssessmentService;
use super::views::AssessmentView;

/// Router exposing the questionnaire catalogue and assessment submission.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/assessments", post(submit_handler))
        .route("/api/v1/assessments/questions", get(questions_handler))
        .with_state(service)
}

pub(crate) async fn submit_handler(
    State(service): State<Arc<AssessmentService>>,
    payload: Result<Json<AssessmentSubmission>, JsonRejection>,
) -> Response {
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            warn!(status = %rejection.status(), "submission body rejected");
            let payload = json!({ "error": rejection.body_text() });
            return (rejection.status(), Json(payload)).into_response();
        }
    };

    match service.submit(&submission) {
        Ok(record) => (StatusCode::OK, Json(AssessmentView::from_record(&record))).into_response(),
        Err(rejection) => {
            let violations: Vec<String> = rejection
                .violations
                .iter()
                .map(ToString::to_string)
                .collect();
            let payload = json!({
                "error": rejection.to_string(),
                "violations": violations,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn questions_handler(
    State(service): State<Arc<AssessmentService>>,
) -> Response {
    (StatusCode::OK, Json(service.questions())).into_response()
}
