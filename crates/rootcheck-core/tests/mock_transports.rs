use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use rootcheck_core::{Error, ProbeRequest, ProbeResponse, Transport};

/// Answers every request with a fixed status and remembers the paths it saw.
pub struct StaticTransport {
    status: u16,
    seen: Mutex<Vec<String>>,
}

impl StaticTransport {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen_paths(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StaticTransport {
    fn describe(&self) -> String {
        "static://test".to_string()
    }

    async fn send(&self, request: ProbeRequest) -> Result<ProbeResponse, Error> {
        self.seen.lock().unwrap().push(request.path);
        Ok(ProbeResponse {
            status: self.status,
        })
    }
}

/// Fails every request as if the connection had been refused.
pub struct RefusingTransport;

#[async_trait]
impl Transport for RefusingTransport {
    fn describe(&self) -> String {
        "refused://test".to_string()
    }

    async fn send(&self, _request: ProbeRequest) -> Result<ProbeResponse, Error> {
        Err(Error::Transport("connection refused".to_string()))
    }
}

/// Never answers within any reasonable timeout.
pub struct HangingTransport;

#[async_trait]
impl Transport for HangingTransport {
    fn describe(&self) -> String {
        "hanging://test".to_string()
    }

    async fn send(&self, _request: ProbeRequest) -> Result<ProbeResponse, Error> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(ProbeResponse { status: 200 })
    }
}
