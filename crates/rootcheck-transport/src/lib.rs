//! Ways of delivering a probe to a target application.

mod http;
mod router;

pub use http::HttpTransport;
pub use router::RouterTransport;
