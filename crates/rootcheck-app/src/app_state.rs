use axum::http::StatusCode;
use chrono::{DateTime, Utc};

/// Shared application state. Immutable once the router is built.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Status the root route answers with.
    pub root_status: StatusCode,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    #[must_use]
    pub fn new(root_status: StatusCode) -> Self {
        Self {
            root_status,
            started_at: Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(StatusCode::OK)
    }
}
