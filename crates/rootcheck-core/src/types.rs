use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Status code a healthy root endpoint must answer with.
pub const DEFAULT_EXPECTED_STATUS: u16 = 200;

/// How long a probe waits for the response before giving up.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// A GET request sent to the target. The checker never adds headers, a body
/// or a query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub path: String,
}

impl ProbeRequest {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// What the target answered. Only the status code is inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
}

/// A single smoke check: which path to hit, what status to demand, and how
/// long to wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub path: String,
    pub expected_status: u16,
    pub timeout: Duration,
}

impl Probe {
    /// `GET /` expecting exactly `200`.
    #[must_use]
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            expected_status: DEFAULT_EXPECTED_STATUS,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };
        self
    }

    #[must_use]
    pub fn with_expected_status(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn request(&self) -> ProbeRequest {
        ProbeRequest::get(self.path.clone())
    }
}

impl Default for Probe {
    fn default() -> Self {
        Self::root()
    }
}

/// Outcome of one check run, suitable for printing or serializing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub target: String,
    pub path: String,
    pub expected_status: u16,
    pub actual_status: Option<u16>,
    pub passed: bool,
    pub elapsed_ms: u64,
    pub checked_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckReport {
    /// Failed report for a probe that was never sent, e.g. because the target
    /// could not be addressed.
    #[must_use]
    pub fn not_sent(target: impl Into<String>, probe: &Probe, error: &Error) -> Self {
        Self {
            target: target.into(),
            path: probe.path.clone(),
            expected_status: probe.expected_status,
            actual_status: None,
            passed: false,
            elapsed_ms: 0,
            checked_at: Utc::now(),
            error: Some(error.to_string()),
        }
    }
}

impl std::fmt::Display for CheckReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.passed { "PASS" } else { "FAIL" };
        write!(f, "{verdict} GET {}{}", self.target, self.path)?;
        match (&self.error, self.actual_status) {
            (Some(err), _) => write!(f, ": {err}")?,
            (None, Some(status)) => write!(f, " -> {status}")?,
            (None, None) => {}
        }
        write!(f, " ({} ms)", self.elapsed_ms)
    }
}
