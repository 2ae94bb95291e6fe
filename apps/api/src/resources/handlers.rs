//! Axum route handler for resource search.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::PromptRequest;
use crate::resources::defaults::default_resources;
use crate::resources::models::ResourceSet;
use crate::resources::prompts::{
    SEARCH_RESOURCES_MAX_TOKENS, SEARCH_RESOURCES_PROMPT, SEARCH_RESOURCES_SYSTEM,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResourcesRequest {
    pub query: Option<String>,
    pub query_type: Option<String>,
}

/// POST /api/search-resources
///
/// Recommends resources for a free-text query. Any provider failure is
/// replaced by the canned resource list; the response is always 200 once
/// validation passes.
pub async fn handle_search_resources(
    State(state): State<AppState>,
    Json(request): Json<SearchResourcesRequest>,
) -> Result<Json<ResourceSet>, AppError> {
    let query = request
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::Validation("Search query is required".to_string()))?;

    let query_type = request
        .query_type
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or("general");

    let prompt = SEARCH_RESOURCES_PROMPT
        .replace("{query}", query)
        .replace("{query_type}", query_type);
    let llm_request = PromptRequest::new(
        SEARCH_RESOURCES_SYSTEM,
        &prompt,
        SEARCH_RESOURCES_MAX_TOKENS,
    );

    let results: ResourceSet = state
        .llm
        .call_json_or(&llm_request, || ResourceSet {
            results: default_resources(query),
        })
        .await;

    info!("Resource search for '{query}' returned {} results", results.results.len());

    Ok(Json(results))
}
