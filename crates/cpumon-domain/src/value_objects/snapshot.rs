//! Processor time snapshot

use serde::{Deserialize, Serialize};

/// Cumulative processor times since host boot
///
/// Units are whatever the host reports (100 ns intervals on Windows, clock
/// ticks on Linux). `kernel` includes `idle`, matching how Windows reports
/// it; adapters for other platforms fold idle time into kernel time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSnapshot {
    /// Time all processors spent idle
    pub idle: u64,
    /// Time spent in privileged mode, idle time included
    pub kernel: u64,
    /// Time spent in unprivileged mode
    pub user: u64,
}

impl TimeSnapshot {
    /// Create a snapshot from raw counters
    pub const fn new(idle: u64, kernel: u64, user: u64) -> Self {
        Self { idle, kernel, user }
    }

    /// Busy time: kernel plus user with idle subtracted once
    ///
    /// Saturates at zero when the idle reading is skewed ahead of the
    /// kernel/user readings. No negative busy time is ever carried into the
    /// baseline; the next interval is measured from zero instead.
    pub fn system_time(&self) -> u64 {
        self.kernel
            .saturating_add(self.user)
            .saturating_sub(self.idle)
    }
}
