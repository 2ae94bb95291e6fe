use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
/// Returns a static status object; touches no state.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Resume Analysis API is running"
    }))
}
