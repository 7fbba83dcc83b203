use std::time::Instant;

use chrono::Utc;

use crate::error::Error;
use crate::traits::Transport;
use crate::types::{CheckReport, Probe, ProbeResponse};

/// Verify that `GET /` on `target` answers exactly `200`.
///
/// # Errors
///
/// Returns [`Error::AssertionFailure`] when the status differs and
/// [`Error::Transport`] when no response arrives within the default timeout.
pub async fn check_root_endpoint(target: &dyn Transport) -> Result<(), Error> {
    check(target, &Probe::root()).await.map(|_| ())
}

/// Run `probe` against `target` and compare the status for equality.
///
/// # Errors
///
/// Returns [`Error::AssertionFailure`] on a status mismatch, and
/// [`Error::Transport`] when the request fails or exceeds `probe.timeout`.
pub async fn check(target: &dyn Transport, probe: &Probe) -> Result<ProbeResponse, Error> {
    let response = tokio::time::timeout(probe.timeout, target.send(probe.request()))
        .await
        .map_err(|_| {
            Error::Transport(format!(
                "no response from {} within {} ms",
                target.describe(),
                probe.timeout.as_millis()
            ))
        })??;

    if response.status != probe.expected_status {
        return Err(Error::AssertionFailure {
            expected: probe.expected_status,
            actual: response.status,
        });
    }

    Ok(response)
}

/// Like [`check`], but records the outcome instead of failing.
pub async fn run(target: &dyn Transport, probe: &Probe) -> CheckReport {
    let target_name = target.describe();
    let checked_at = Utc::now();
    let started = Instant::now();

    let result = check(target, probe).await;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let (actual_status, error) = match &result {
        Ok(response) => (Some(response.status), None),
        Err(e) => (e.actual_status(), Some(e.to_string())),
    };

    match &error {
        None => tracing::info!(
            endpoint = %target_name,
            path = %probe.path,
            elapsed_ms,
            "smoke check passed"
        ),
        Some(e) => tracing::warn!(
            endpoint = %target_name,
            path = %probe.path,
            elapsed_ms,
            error = %e,
            "smoke check failed"
        ),
    }

    CheckReport {
        target: target_name,
        path: probe.path.clone(),
        expected_status: probe.expected_status,
        actual_status,
        passed: result.is_ok(),
        elapsed_ms,
        checked_at,
        error,
    }
}
