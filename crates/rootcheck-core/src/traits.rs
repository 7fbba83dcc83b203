use async_trait::async_trait;

use crate::error::Error;
use crate::types::{ProbeRequest, ProbeResponse};

/// Something a probe can be delivered to: a server over the network or an
/// in-process request dispatcher.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Human-readable name of the target, used in reports and logs.
    fn describe(&self) -> String;

    /// Send one GET request and return the observed status.
    ///
    /// Implementations must not retry and must map every failure to complete
    /// the exchange to [`Error::Transport`].
    async fn send(&self, request: ProbeRequest) -> Result<ProbeResponse, Error>;
}
