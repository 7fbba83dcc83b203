//! Server configuration.

use axum::http::StatusCode;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a port number")]
    InvalidPort { var: &'static str, value: String },

    #[error("invalid {var}: {value:?} is not an HTTP status code")]
    InvalidStatus { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Interface to bind (default: "0.0.0.0").
    pub host: String,

    /// Port to bind (default: 3000).
    pub port: u16,

    /// Status served on `GET /` (default: 200).
    pub root_status: StatusCode,
}

impl AppConfig {
    /// Load configuration from `ROOTCHECK_HOST`, `ROOTCHECK_PORT` and
    /// `ROOTCHECK_ROOT_STATUS`.
    ///
    /// # Errors
    ///
    /// Returns an error if the port or root status cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if the port or root status cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("ROOTCHECK_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("ROOTCHECK_PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: "ROOTCHECK_PORT",
                value,
            })?,
            None => 3000,
        };

        let root_status = match lookup("ROOTCHECK_ROOT_STATUS") {
            Some(value) => parse_status(&value).ok_or(ConfigError::InvalidStatus {
                var: "ROOTCHECK_ROOT_STATUS",
                value,
            })?,
            None => StatusCode::OK,
        };

        Ok(Self {
            host,
            port,
            root_status,
        })
    }

    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_status(value: &str) -> Option<StatusCode> {
    let code: u16 = value.trim().parse().ok()?;
    StatusCode::from_u16(code).ok()
}
