use anyhow::Context;
use axum::http::StatusCode;

use rootcheck_app::{create_router, AppState};
use rootcheck_core::{CheckReport, Probe};
use rootcheck_transport::RouterTransport;

/// Build the bundled app in-process and probe its root route.
pub async fn run(root_status: u16) -> anyhow::Result<CheckReport> {
    let root_status = StatusCode::from_u16(root_status)
        .with_context(|| format!("invalid root status {root_status}"))?;

    let target = RouterTransport::new(create_router(AppState::new(root_status)));
    Ok(rootcheck_core::run(&target, &Probe::root()).await)
}
