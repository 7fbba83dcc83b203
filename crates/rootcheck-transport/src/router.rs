use std::convert::Infallible;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request},
    Router,
};
use tower::ServiceExt;

use rootcheck_core::{Error, ProbeRequest, ProbeResponse, Transport};

/// Dispatches probes straight into an axum router, without a socket.
#[derive(Clone)]
pub struct RouterTransport {
    router: Router,
}

impl RouterTransport {
    #[must_use]
    pub fn new(router: Router) -> Self {
        Self { router }
    }
}

#[async_trait]
impl Transport for RouterTransport {
    fn describe(&self) -> String {
        "in-process".to_string()
    }

    async fn send(&self, request: ProbeRequest) -> Result<ProbeResponse, Error> {
        let req = Request::builder()
            .method(Method::GET)
            .uri(&request.path)
            .body(Body::empty())
            .map_err(|e| Error::InvalidTarget(format!("{}: {e}", request.path)))?;

        let resp = self
            .router
            .clone()
            .oneshot(req)
            .await
            .map_err(|never: Infallible| -> Error { match never {} })?;

        Ok(ProbeResponse {
            status: resp.status().as_u16(),
        })
    }
}
