//! Axum route handlers for interview preparation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::interview::defaults::{default_feedback, default_questions};
use crate::interview::prompts::{
    GENERATE_QUESTIONS_MAX_TOKENS, GENERATE_QUESTIONS_PROMPT, GENERATE_QUESTIONS_SYSTEM,
    RESUME_CONTEXT_FRAGMENT, REVIEW_ANSWER_MAX_TOKENS, REVIEW_ANSWER_PROMPT, REVIEW_ANSWER_SYSTEM,
};
use crate::llm_client::PromptRequest;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    pub position: Option<String>,
    #[serde(default)]
    pub has_resume: bool,
    pub resume_analysis: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionSet {
    pub questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAnswerRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub position: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub feedback: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-interview-questions
///
/// Returns six questions for the given position. Any provider failure is
/// replaced by the deterministic default question set; the response is
/// always 200 once validation passes.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<QuestionSet>, AppError> {
    let position = request
        .position
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::Validation("Position is required".to_string()))?;

    let resume_context = match (&request.resume_analysis, request.has_resume) {
        (Some(analysis), true) => {
            RESUME_CONTEXT_FRAGMENT.replace("{resume_analysis}", &analysis.to_string())
        }
        _ => String::new(),
    };

    let prompt = GENERATE_QUESTIONS_PROMPT
        .replace("{position}", position)
        .replace("{resume_context}", &resume_context);
    let llm_request = PromptRequest::new(
        GENERATE_QUESTIONS_SYSTEM,
        &prompt,
        GENERATE_QUESTIONS_MAX_TOKENS,
    );

    let questions: QuestionSet = state
        .llm
        .call_json_or(&llm_request, || QuestionSet {
            questions: default_questions(position),
        })
        .await;

    info!(
        "Generated {} interview questions for '{position}'",
        questions.questions.len()
    );

    Ok(Json(questions))
}

/// POST /api/review-interview-answer
///
/// Returns coaching feedback on an interview answer. Any provider failure is
/// replaced by generic constructive feedback.
pub async fn handle_review_answer(
    State(state): State<AppState>,
    Json(request): Json<ReviewAnswerRequest>,
) -> Result<Json<AnswerFeedback>, AppError> {
    let question = request
        .question
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty());
    let answer = request
        .answer
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty());

    let (question, answer) = match (question, answer) {
        (Some(q), Some(a)) => (q, a),
        _ => {
            return Err(AppError::Validation(
                "Question and answer are required".to_string(),
            ))
        }
    };

    let position_context = request
        .position
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!(" for a {p} position"))
        .unwrap_or_default();

    let prompt = REVIEW_ANSWER_PROMPT
        .replace("{position_context}", &position_context)
        .replace("{question}", question)
        .replace("{answer}", answer);
    let llm_request =
        PromptRequest::new(REVIEW_ANSWER_SYSTEM, &prompt, REVIEW_ANSWER_MAX_TOKENS);

    let feedback: AnswerFeedback = state
        .llm
        .call_json_or(&llm_request, || AnswerFeedback {
            feedback: default_feedback(),
        })
        .await;

    Ok(Json(feedback))
}
