use std::time::Duration;

use rootcheck_core::{CheckReport, Probe};
use rootcheck_transport::HttpTransport;

/// Probe a server over the network. A target that cannot be addressed yields
/// a failed report rather than an error.
pub async fn run(url: &str, path: &str, expect: u16, timeout_secs: u64) -> CheckReport {
    let probe = Probe::root()
        .with_path(path)
        .with_expected_status(expect)
        .with_timeout(Duration::from_secs(timeout_secs));

    let target = match HttpTransport::new(url) {
        Ok(target) => target,
        Err(e) => {
            tracing::warn!("cannot probe {url}: {e}");
            return CheckReport::not_sent(url, &probe, &e);
        }
    };

    tracing::debug!("probing {url}{}", probe.path);
    rootcheck_core::run(&target, &probe).await
}
