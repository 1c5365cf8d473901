use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports service version and whether the AI credential is configured —
/// a missing key is a visible degradation, never a startup failure.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "careerguardian-api",
        "api_key": if state.llm.has_api_key() { "active" } else { "missing" }
    }))
}
