use axum::{extract::State, http::StatusCode};

use crate::app_state::AppState;

/// Root endpoint. Answers with the configured status.
pub async fn root(State(state): State<AppState>) -> (StatusCode, &'static str) {
    let body = state.root_status.canonical_reason().unwrap_or("");
    (state.root_status, body)
}
