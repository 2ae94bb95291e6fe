//! Axum route handler for resume analysis.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::analysis::models::ResumeAnalysis;
use crate::analysis::prompts::{
    ANALYZE_RESUME_MAX_TOKENS, ANALYZE_RESUME_PROMPT, ANALYZE_RESUME_SYSTEM,
};
use crate::errors::AppError;
use crate::llm_client::PromptRequest;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResumeRequest {
    pub resume_text: Option<String>,
}

/// POST /api/analyze-resume
///
/// Scores resume text across structure, content, and ATS compatibility.
/// Upstream failures propagate to the caller: a missing API key is a 500,
/// a provider error passes its status through, and an unparsable completion
/// is a 500. The client renders these; there is no canned analysis to fall
/// back to.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeResumeRequest>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let resume_text = request
        .resume_text
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("Resume text is required".to_string()))?;

    info!("Analyzing resume ({} chars)", resume_text.len());

    let prompt = ANALYZE_RESUME_PROMPT.replace("{resume_text}", resume_text);
    let llm_request =
        PromptRequest::new(ANALYZE_RESUME_SYSTEM, &prompt, ANALYZE_RESUME_MAX_TOKENS);

    let analysis: ResumeAnalysis = state.llm.call_json(&llm_request).await?;

    info!(
        "Resume analysis complete: structure={}, content={}, ats={}, overall={}",
        analysis.structure.score,
        analysis.content.score,
        analysis.ats.score,
        analysis.overall.score
    );

    Ok(Json(analysis))
}
