//! Service registration configuration types

use cpumon_domain::constants::DEFAULT_SERVICE_NAME;
use serde::{Deserialize, Serialize};

/// Service control manager registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Name the service is registered under
    pub name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }
}
