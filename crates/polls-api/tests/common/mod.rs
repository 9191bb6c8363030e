//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::TimeZone;
use http_body_util::BodyExt;
use polls_core::repository::QuestionRepository;
use polls_test_support::FixedClock;
use tower::ServiceExt;

use polls_api::routes;
use polls_api::state::AppState;

/// Fixed timestamp used across all integration tests.
pub fn fixed_clock() -> FixedClock {
    FixedClock(
        chrono::Utc
            .with_ymd_and_hms(2026, 1, 15, 10, 0, 0)
            .unwrap(),
    )
}

/// Build the full app router over `repo` with the fixed test clock. Uses the
/// same route structure as `main.rs`.
pub fn build_test_app(repo: Arc<dyn QuestionRepository>) -> Router {
    routes::router(AppState::new(Arc::new(fixed_clock()), repo))
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Renders each entry of `latest_question_list` as `<Question: ...>`.
pub fn question_reprs(json: &serde_json::Value) -> Vec<String> {
    json["latest_question_list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| format!("<Question: {}>", q["question_text"].as_str().unwrap()))
        .collect()
}
