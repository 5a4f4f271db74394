//! Domain layer constants
//!
//! Defaults that define the externally observable behavior of the monitor.
//! Infrastructure-specific constants live in `cpumon_infrastructure::constants`.

use std::time::Duration;

// ============================================================================
// HTTP CONTRACT
// ============================================================================

/// Default HTTP listener port
pub const DEFAULT_HTTP_PORT: u16 = 8899;

/// Route serving the utilization payload
pub const CPU_ROUTE: &str = "/cpu";

// ============================================================================
// LIFECYCLE
// ============================================================================

/// Default grace period for in-flight requests during shutdown (seconds)
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 5;

/// Name registered with the service control manager
pub const DEFAULT_SERVICE_NAME: &str = "CpuMonitor";

/// Service-specific exit code reported when the listener cannot start
pub const LISTENER_FAILURE_EXIT_CODE: u32 = 1;

// ============================================================================
// SAMPLING
// ============================================================================

/// Delay between the two priming samples taken before serving traffic
pub const PRIME_DELAY: Duration = Duration::from_millis(100);

/// Processor count assumed when the host reports none
pub const FALLBACK_PROCESSOR_COUNT: usize = 1;

/// Upper bound of a utilization percentage
pub const MAX_UTILIZATION: f64 = 100.0;
