use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::assessment::domain::Biometrics;
use crate::assessment::router::{assessment_router, submit_handler};

#[tokio::test]
async fn submit_handler_returns_assessment_view() {
    let response = submit_handler(
        State(service()),
        Ok(axum::Json(submission(overweight_biometrics(), at_risk_answers()))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["overall_score"], 32);
    assert_eq!(payload["grade"], "poor");
    assert_eq!(payload["risk_flags"].as_array().map(Vec::len), Some(6));
    assert_eq!(payload["advice"].as_array().map(Vec::len), Some(6));
    assert_eq!(payload["indicators"]["bmi_category"], "obese");
    assert_eq!(payload["bmi_category_label"], "Obese");
}

#[tokio::test]
async fn submit_handler_returns_unprocessable_for_missing_biometrics() {
    let empty = Biometrics {
        age_years: 0,
        gender: Default::default(),
        height_cm: 0.0,
        weight_kg: 0.0,
    };

    let response = submit_handler(
        State(service()),
        Ok(axum::Json(submission(empty, healthy_answers()))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["violations"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn submit_route_accepts_form_labels_and_aliases() {
    let router = assessment_router(service());
    let body = json!({
        "biometrics": {
            "age_years": 30,
            "gender": "Laki-laki",
            "height_cm": 175,
            "weight_kg": 70
        },
        "answers": {
            "meal_frequency": "3x",
            "fast_food": "at_most_once_weekly",
            "vegetables_fruit": "≥14x",
            "sweet_drinks": "≤1x/minggu",
            "water_intake": "two_liters_or_more",
            "last_meal_before_sleep": "≥3 jam",
            "sleep_duration": "6–8 jam",
            "sleep_consistency": "Teratur",
            "daytime_nap": "≤1 jam/hari",
            "wake_condition": "Sangat segar",
            "exercise_frequency": "≥8x",
            "lifestyle": "active",
            "daily_steps": "≥7000",
            "screen_time": "≤4 jam",
            "stress": "Santai",
            "mood": "Sangat baik",
            "smoking": "Tidak pernah",
            "alcohol": "never"
        }
    });

    let response = router
        .oneshot(
            Request::post("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).expect("serializes")))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["overall_score"], 98);
    assert_eq!(payload["fallbacks"], json!([]));
    assert_eq!(payload["risk_summary"], "No major risk indicated by your answers.");
    assert!(payload["submission_id"]
        .as_str()
        .is_some_and(|id| id.starts_with("qh-")));
}

#[tokio::test]
async fn submit_route_degrades_missing_answers_to_fallbacks() {
    let router = assessment_router(service());
    let body = json!({
        "biometrics": {
            "age_years": 52,
            "gender": "female",
            "height_cm": 158.5,
            "weight_kg": 61.2
        },
        "answers": {
            "sleep_duration": "<6 jam"
        }
    });

    let response = router
        .oneshot(
            Request::post("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).expect("serializes")))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["fallbacks"].as_array().map(Vec::len), Some(18));
    assert_eq!(payload["overall_score"], 54);
    assert_eq!(payload["risk_flags"], json!([]));
}

#[tokio::test]
async fn questions_route_publishes_catalogue() {
    let router = assessment_router(service());

    let response = router
        .oneshot(
            Request::get("/api/v1/assessments/questions")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let questions = payload.as_array().expect("array payload");
    assert_eq!(questions.len(), 18);
    assert_eq!(questions[0]["key"], "meal_frequency");
    assert_eq!(questions[0]["options"][1]["score"], 100);
}

async fn post_raw(body: &str) -> axum::response::Response {
    assessment_router(service())
        .oneshot(
            Request::post("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes")
}

#[tokio::test]
async fn submit_route_degrades_null_and_numeric_answers() {
    let response = post_raw(
        r#"{
            "biometrics": {"age_years": 30, "gender": "male", "height_cm": 175, "weight_kg": 70},
            "answers": {"mood": null, "stress": 4, "sleep_duration": true}
        }"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["overall_score"], 54);
    assert_eq!(payload["fallbacks"].as_array().map(Vec::len), Some(18));
    assert_eq!(payload["risk_flags"], json!([]));
}

#[tokio::test]
async fn submit_route_reports_null_biometrics_as_violations() {
    let response = post_raw(
        r#"{
            "biometrics": {
                "age_years": "thirty",
                "gender": null,
                "height_cm": null,
                "weight_kg": 70
            },
            "answers": null
        }"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["violations"].as_array().map(Vec::len), Some(3));
    assert!(payload["error"]
        .as_str()
        .is_some_and(|error| error.starts_with("incomplete submission")));
}

#[tokio::test]
async fn malformed_body_gets_json_error() {
    let response = post_raw("{ not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"].is_string());
}
