//! Host processor time sources
//!
//! Adapters for the [`HostTimeSource`] port:
//!
//! | Adapter | Platform | Counters |
//! |---------|----------|----------|
//! | [`ProcStatTimeSource`] | Linux | aggregate `cpu` line of `/proc/stat` |
//! | `SystemTimesSource` | Windows | `GetSystemTimes` (100 ns units) |
//! | [`ScriptedTimeSource`] | any | replays a fixed sequence |
//! | [`UnsupportedTimeSource`] | others | always fails |

pub mod proc_stat;
pub mod processors;
pub mod scripted;
#[cfg(windows)]
pub mod system_times;

pub use proc_stat::{ProcStatTimeSource, parse_proc_stat};
pub use processors::host_processor_count;
pub use scripted::ScriptedTimeSource;
#[cfg(windows)]
pub use system_times::SystemTimesSource;

use cpumon_domain::error::{Error, Result};
use cpumon_domain::ports::{HostTimeSource, SharedHostTimeSource};
use cpumon_domain::value_objects::TimeSnapshot;
use std::sync::Arc;

/// Time source for the platform the binary runs on
pub fn default_time_source() -> SharedHostTimeSource {
    #[cfg(target_os = "linux")]
    {
        Arc::new(ProcStatTimeSource::new())
    }
    #[cfg(windows)]
    {
        Arc::new(SystemTimesSource::new())
    }
    #[cfg(not(any(target_os = "linux", windows)))]
    {
        Arc::new(UnsupportedTimeSource)
    }
}

/// Placeholder for platforms without cumulative processor counters
///
/// Every read fails, so the endpoint reports `0.0` with an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedTimeSource;

impl HostTimeSource for UnsupportedTimeSource {
    fn read_processor_times(&self) -> Result<TimeSnapshot> {
        Err(Error::unsupported(
            "cumulative processor times are not available on this platform",
        ))
    }

    fn processor_count(&self) -> usize {
        host_processor_count()
    }
}
