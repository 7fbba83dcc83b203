/// Errors surfaced by a smoke check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A response arrived but its status differs from the expected one.
    #[error("assertion failed: expected status {expected}, got {actual}")]
    AssertionFailure { expected: u16, actual: u16 },

    /// The request could not complete (refused, DNS, timeout, I/O).
    #[error("transport error: {0}")]
    Transport(String),

    /// The target could not be addressed at all (bad URL, bad path).
    #[error("invalid target: {0}")]
    InvalidTarget(String),
}

impl Error {
    /// Status the target actually answered with, if it answered.
    #[must_use]
    pub fn actual_status(&self) -> Option<u16> {
        match self {
            Self::AssertionFailure { actual, .. } => Some(*actual),
            Self::Transport(_) | Self::InvalidTarget(_) => None,
        }
    }
}
