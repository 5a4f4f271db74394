//! Logging configuration types

use crate::constants::{DEFAULT_LOG_FILE_NAME, DEFAULT_LOG_LEVEL, DEFAULT_SERVICE_LOG_DIR};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily-rotated file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

impl LoggingConfig {
    /// Logging for a supervised run
    ///
    /// Services have no console, so a missing `file_output` is filled in
    /// with [`default_service_log_path`]. An explicit path is kept.
    #[must_use]
    pub fn for_service(mut self) -> Self {
        if self.file_output.is_none() {
            self.file_output = Some(default_service_log_path());
        }
        self
    }
}

/// `<local data dir>/cpumon/logs/cpumon.log`, under the temp dir if the
/// platform has no local data directory
pub fn default_service_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(DEFAULT_SERVICE_LOG_DIR)
        .join("logs")
        .join(DEFAULT_LOG_FILE_NAME)
}
