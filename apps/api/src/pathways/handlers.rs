//! Axum route handler for career pathway analysis.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::PromptRequest;
use crate::pathways::defaults::default_pathways;
use crate::pathways::models::{PathwaySet, UserProfile};
use crate::pathways::prompts::{
    ANALYZE_PATHWAYS_MAX_TOKENS, ANALYZE_PATHWAYS_PROMPT, ANALYZE_PATHWAYS_SYSTEM,
    PATHWAYS_RESUME_FRAGMENT,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzePathwaysRequest {
    pub user_profile: Option<UserProfile>,
    #[serde(default)]
    pub has_resume: bool,
    pub resume_analysis: Option<serde_json::Value>,
}

/// POST /api/analyze-career-pathways
///
/// Suggests career pathways for a coarse user profile. Any provider failure
/// is replaced by the education-keyed default pathway list; the response is
/// always 200 once validation passes.
pub async fn handle_analyze_pathways(
    State(state): State<AppState>,
    Json(request): Json<AnalyzePathwaysRequest>,
) -> Result<Json<PathwaySet>, AppError> {
    let profile = request
        .user_profile
        .ok_or_else(|| AppError::Validation("User profile is required".to_string()))?;

    let resume_context = match (&request.resume_analysis, request.has_resume) {
        (Some(analysis), true) => {
            PATHWAYS_RESUME_FRAGMENT.replace("{resume_analysis}", &analysis.to_string())
        }
        _ => String::new(),
    };

    let prompt = ANALYZE_PATHWAYS_PROMPT
        .replace("{education}", profile.education.as_deref().unwrap_or("not specified"))
        .replace(
            "{experience}",
            profile.experience.as_deref().unwrap_or("not specified"),
        )
        .replace(
            "{interests}",
            profile.interests.as_deref().unwrap_or("not specified"),
        )
        .replace("{resume_context}", &resume_context);
    let llm_request = PromptRequest::new(
        ANALYZE_PATHWAYS_SYSTEM,
        &prompt,
        ANALYZE_PATHWAYS_MAX_TOKENS,
    );

    let pathways: PathwaySet = state
        .llm
        .call_json_or(&llm_request, || PathwaySet {
            pathways: default_pathways(&profile),
        })
        .await;

    info!("Suggested {} career pathways", pathways.pathways.len());

    Ok(Json(pathways))
}
