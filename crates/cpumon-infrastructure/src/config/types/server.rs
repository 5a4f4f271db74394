//! HTTP listener configuration types

use crate::constants::DEFAULT_SERVER_HOST;
use cpumon_domain::constants::{DEFAULT_HTTP_PORT, DEFAULT_SHUTDOWN_GRACE_SECS};
use cpumon_domain::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::time::Duration;

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Seconds in-flight requests get to finish during shutdown
    pub shutdown_grace_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            shutdown_grace_secs: DEFAULT_SHUTDOWN_GRACE_SECS,
        }
    }
}

impl ServerConfig {
    /// Config bound to localhost on the given port
    pub fn localhost(port: u16) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port,
            ..Self::default()
        }
    }

    /// Parsed bind address
    pub fn ip_addr(&self) -> Result<IpAddr> {
        self.host.parse().map_err(|e| Error::Configuration {
            message: format!("Invalid server host '{}'", self.host),
            source: Some(Box::new(e)),
        })
    }

    /// Grace period as a duration
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}
