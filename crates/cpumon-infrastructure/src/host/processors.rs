//! Logical processor count via sysinfo

use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Number of logical processors, 0 if sysinfo cannot tell
pub fn host_processor_count() -> usize {
    let sys = System::new_with_specifics(
        RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_cpu_usage()),
    );
    sys.cpus().len()
}
