//! Infrastructure layer constants
//!
//! Domain defaults (port, grace period, service name) live in
//! `cpumon_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cpumon.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "cpumon";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "CPUMON";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Default bind address (all interfaces)
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "CPUMON_LOG";

/// File name prefix used when the configured log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "cpumon";

/// Log file name used by supervised runs without `logging.file_output`
pub const DEFAULT_LOG_FILE_NAME: &str = "cpumon.log";

/// Directory under the local data dir holding service logs
pub const DEFAULT_SERVICE_LOG_DIR: &str = "cpumon";

// ============================================================================
// HOST COUNTER CONSTANTS
// ============================================================================

/// Linux aggregate processor statistics
pub const PROC_STAT_PATH: &str = "/proc/stat";

/// Prefix of the aggregate line in `/proc/stat`
pub const PROC_STAT_CPU_PREFIX: &str = "cpu ";
