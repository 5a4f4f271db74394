//! Host Time Source Port
//!
//! Defines the contract for reading cumulative processor times.

use crate::error::Result;
use crate::value_objects::TimeSnapshot;
use std::sync::Arc;

/// Source of host-wide processor time counters
///
/// Implementations must return counters that are monotonically
/// non-decreasing for the lifetime of the host. Calls are blocking and
/// expected to be cheap (a syscall or a small file read).
pub trait HostTimeSource: Send + Sync {
    /// Read cumulative idle, kernel and user time since boot
    fn read_processor_times(&self) -> Result<TimeSnapshot>;

    /// Number of logical processors, or 0 when unknown
    fn processor_count(&self) -> usize;
}

/// Shared host time source
pub type SharedHostTimeSource = Arc<dyn HostTimeSource>;
