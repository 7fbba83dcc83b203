pub mod check;
pub mod error;
pub mod traits;
pub mod types;

pub use check::{check, check_root_endpoint, run};
pub use error::Error;
pub use traits::Transport;
pub use types::{CheckReport, Probe, ProbeRequest, ProbeResponse};
