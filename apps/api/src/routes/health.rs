use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status and whether a remote model is configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let remote_configured = state.enhancer.remote_configured();

    Json(json!({
        "status": "healthy",
        "service": "resume-enhancer",
        "version": env!("CARGO_PKG_VERSION"),
        "remote_configured": remote_configured,
        "model": remote_configured.then(|| state.config.llm_model.clone()),
        "timestamp": Utc::now().to_rfc3339()
    }))
}
