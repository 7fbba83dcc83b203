pub mod app_state;
pub mod config;
pub mod handlers;
pub mod router;

pub use app_state::AppState;
pub use config::{AppConfig, ConfigError};
pub use router::create_router;
