//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::logging::LoggingConfig;
pub use super::server::ServerConfig;
pub use super::service::ServiceConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Service control manager registration
    pub service: ServiceConfig,
}
