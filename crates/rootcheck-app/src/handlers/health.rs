use axum::{extract::State, Json};
use chrono::Utc;

use crate::app_state::AppState;

/// Health check endpoint. Always 200, independent of the root status.
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let uptime = (Utc::now() - state.started_at).num_seconds().max(0);
    Json(serde_json::json!({
        "status": "ok",
        "uptime_seconds": uptime,
    }))
}
