//! Endpoint-level tests driving the real router without a live provider.
//!
//! The client is built without an API key, which exercises both halves of
//! the failure policy: propagate endpoints return errors, fallback endpoints
//! return their deterministic payloads.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use coach_api::config::Config;
use coach_api::llm_client::LlmClient;
use coach_api::routes::build_router;
use coach_api::state::AppState;

fn app_without_api_key() -> Router {
    let config = Config {
        anthropic_api_key: None,
        port: 3001,
        rust_log: "info".to_string(),
    };
    let state = AppState {
        llm: LlmClient::new(None),
        config,
    };
    build_router(state)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_returns_ok() {
    let response = app_without_api_key()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "OK");
}

#[tokio::test]
async fn analyze_resume_rejects_missing_text() {
    let (status, body) = post_json(app_without_api_key(), "/api/analyze-resume", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn analyze_resume_rejects_blank_text() {
    let (status, body) = post_json(
        app_without_api_key(),
        "/api/analyze-resume",
        json!({"resumeText": "   "}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn analyze_resume_without_key_is_a_server_error() {
    let (status, body) = post_json(
        app_without_api_key(),
        "/api/analyze-resume",
        json!({"resumeText": "Jane Doe. Rust engineer, 5 years."}),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Anthropic API key not configured");
}

#[tokio::test]
async fn extract_pdf_rejects_missing_data() {
    let (status, body) = post_json(app_without_api_key(), "/api/extract-pdf", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(body.get("text").is_none());
}

#[tokio::test]
async fn extract_pdf_reports_empty_bytes_with_placeholder() {
    let (status, body) = post_json(
        app_without_api_key(),
        "/api/extract-pdf",
        json!({"pdfData": []}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["text"], "[Empty PDF - no extractable text found]");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn extract_pdf_reports_garbage_bytes_with_placeholder() {
    let (status, body) = post_json(
        app_without_api_key(),
        "/api/extract-pdf",
        json!({"pdfData": [1, 2, 3, 4]}),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["text"], "[PDF extraction failed - manual input required]");
}

#[tokio::test]
async fn interview_questions_reject_missing_position() {
    let (status, body) = post_json(
        app_without_api_key(),
        "/api/generate-interview-questions",
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn interview_questions_fall_back_without_key() {
    let (status, body) = post_json(
        app_without_api_key(),
        "/api/generate-interview-questions",
        json!({"position": "Software Engineer", "hasResume": false}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 6);
    assert!(questions[0].as_str().unwrap().contains("Software Engineer"));
}

#[tokio::test]
async fn answer_review_rejects_missing_answer() {
    let (status, body) = post_json(
        app_without_api_key(),
        "/api/review-interview-answer",
        json!({"question": "Why us?"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn answer_review_falls_back_without_key() {
    let (status, body) = post_json(
        app_without_api_key(),
        "/api/review-interview-answer",
        json!({
            "question": "Why do you want this role?",
            "answer": "Because I enjoy the domain.",
            "position": "Data Analyst"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["feedback"].as_str().unwrap().contains("STAR"));
}

#[tokio::test]
async fn career_pathways_reject_missing_profile() {
    let (status, body) = post_json(
        app_without_api_key(),
        "/api/analyze-career-pathways",
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn career_pathways_fall_back_to_tech_defaults() {
    let (status, body) = post_json(
        app_without_api_key(),
        "/api/analyze-career-pathways",
        json!({"userProfile": {"education": "Computer Science"}, "hasResume": false}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let pathways = body["pathways"].as_array().unwrap();
    assert_eq!(pathways.len(), 2);
    assert_eq!(pathways[0]["title"], "Software Developer");
    assert_eq!(pathways[1]["title"], "Data Analyst");
    assert!(pathways[0]["keySkills"].is_array());
}

#[tokio::test]
async fn resource_search_rejects_missing_query() {
    let (status, body) =
        post_json(app_without_api_key(), "/api/search-resources", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn resource_search_falls_back_without_key() {
    let (status, body) = post_json(
        app_without_api_key(),
        "/api/search-resources",
        json!({"query": "rust programming", "queryType": "learning"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert!(results[0]["title"]
        .as_str()
        .unwrap()
        .contains("rust programming"));
    assert!(results[0]["resourceType"].is_string());
}
