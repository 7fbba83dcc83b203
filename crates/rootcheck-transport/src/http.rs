use async_trait::async_trait;
use reqwest::{redirect, Client, Url};

use rootcheck_core::{Error, ProbeRequest, ProbeResponse, Transport};

/// Probes a server over the network.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for `base_url` (e.g. `"http://localhost:3000"`).
    ///
    /// Redirects are not followed, so the observed status is the one the
    /// target itself answered with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTarget`] if the URL does not parse, is not
    /// `http`/`https`, or carries a query string or fragment.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let url =
            Url::parse(base_url).map_err(|e| Error::InvalidTarget(format!("{base_url}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidTarget(format!(
                "{base_url}: unsupported scheme {}",
                url.scheme()
            )));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(Error::InvalidTarget(format!(
                "{base_url}: base URL must not carry a query or fragment"
            )));
        }

        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| Error::InvalidTarget(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn describe(&self) -> String {
        self.base_url.clone()
    }

    async fn send(&self, request: ProbeRequest) -> Result<ProbeResponse, Error> {
        let url = format!("{}{}", self.base_url, request.path);
        tracing::debug!("GET {url}");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Transport(error_chain(&e)))?;

        Ok(ProbeResponse {
            status: resp.status().as_u16(),
        })
    }
}

/// reqwest's top-level message hides the cause ("connection refused" and the
/// like) in its source chain.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
