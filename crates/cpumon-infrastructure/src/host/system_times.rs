//! Windows `GetSystemTimes` time source

use crate::host::processors::host_processor_count;
use cpumon_domain::error::{Error, Result};
use cpumon_domain::ports::HostTimeSource;
use cpumon_domain::value_objects::TimeSnapshot;
use std::sync::OnceLock;
use windows::Win32::Foundation::FILETIME;
use windows::Win32::System::Threading::GetSystemTimes;

/// Reads processor times with `GetSystemTimes`
///
/// Kernel time as reported by Windows already includes idle time.
#[derive(Debug, Default)]
pub struct SystemTimesSource {
    processors: OnceLock<usize>,
}

impl SystemTimesSource {
    /// Create the source
    pub fn new() -> Self {
        Self::default()
    }
}

impl HostTimeSource for SystemTimesSource {
    #[allow(unsafe_code)]
    fn read_processor_times(&self) -> Result<TimeSnapshot> {
        let mut idle = FILETIME::default();
        let mut kernel = FILETIME::default();
        let mut user = FILETIME::default();

        // SAFETY: the three pointers reference live, writable FILETIMEs
        unsafe { GetSystemTimes(Some(&mut idle), Some(&mut kernel), Some(&mut user)) }
            .map_err(|e| Error::host_time(format!("GetSystemTimes failed: {e}")))?;

        Ok(TimeSnapshot::new(
            filetime_ticks(idle),
            filetime_ticks(kernel),
            filetime_ticks(user),
        ))
    }

    fn processor_count(&self) -> usize {
        *self.processors.get_or_init(host_processor_count)
    }
}

/// 100 ns ticks held in a FILETIME
fn filetime_ticks(ft: FILETIME) -> u64 {
    u64::from(ft.dwLowDateTime) | (u64::from(ft.dwHighDateTime) << 32)
}
