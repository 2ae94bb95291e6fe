pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze_resume;
use crate::interview::handlers::{handle_generate_questions, handle_review_answer};
use crate::pathways::handlers::handle_analyze_pathways;
use crate::pdf::handlers::handle_extract_pdf;
use crate::resources::handlers::handle_search_resources;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/analyze-resume", post(handle_analyze_resume))
        .route("/api/extract-pdf", post(handle_extract_pdf))
        .route(
            "/api/generate-interview-questions",
            post(handle_generate_questions),
        )
        .route("/api/review-interview-answer", post(handle_review_answer))
        .route("/api/analyze-career-pathways", post(handle_analyze_pathways))
        .route("/api/search-resources", post(handle_search_resources))
        .with_state(state)
}
