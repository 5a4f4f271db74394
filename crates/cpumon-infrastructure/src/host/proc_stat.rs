//! Linux `/proc/stat` time source
//!
//! The aggregate line reads
//! `cpu user nice system idle iowait irq softirq steal guest guest_nice`
//! in clock ticks since boot. Fields are folded into the Windows shape the
//! sampler expects:
//!
//! - idle   = idle + iowait
//! - user   = user + nice
//! - kernel = system + irq + softirq + steal + idle
//!
//! `guest` and `guest_nice` are already counted in `user`/`nice`.

use crate::constants::{PROC_STAT_CPU_PREFIX, PROC_STAT_PATH};
use crate::error_ext::ErrorContext;
use crate::host::processors::host_processor_count;
use cpumon_domain::error::{Error, Result};
use cpumon_domain::ports::HostTimeSource;
use cpumon_domain::value_objects::TimeSnapshot;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Reads processor times from `/proc/stat`
#[derive(Debug)]
pub struct ProcStatTimeSource {
    path: PathBuf,
    processors: OnceLock<usize>,
}

impl ProcStatTimeSource {
    /// Source reading the system `/proc/stat`
    pub fn new() -> Self {
        Self::with_path(PROC_STAT_PATH)
    }

    /// Source reading an alternate file in `/proc/stat` format
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            processors: OnceLock::new(),
        }
    }
}

impl Default for ProcStatTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HostTimeSource for ProcStatTimeSource {
    fn read_processor_times(&self) -> Result<TimeSnapshot> {
        let content = std::fs::read_to_string(&self.path)
            .io_context(format!("Failed to read {}", self.path.display()))?;
        parse_proc_stat(&content)
    }

    fn processor_count(&self) -> usize {
        *self.processors.get_or_init(host_processor_count)
    }
}

/// Parse the aggregate `cpu` line of `/proc/stat` content
pub fn parse_proc_stat(content: &str) -> Result<TimeSnapshot> {
    let line = content
        .lines()
        .find(|line| line.starts_with(PROC_STAT_CPU_PREFIX))
        .ok_or_else(|| Error::host_time("no aggregate cpu line in /proc/stat"))?;

    let fields = line
        .split_whitespace()
        .skip(1)
        .map(|field| {
            field
                .parse::<u64>()
                .map_err(|e| Error::host_time(format!("invalid /proc/stat field '{field}': {e}")))
        })
        .collect::<Result<Vec<u64>>>()?;

    if fields.len() < 4 {
        return Err(Error::host_time(format!(
            "cpu line too short: expected at least 4 counters, got {}",
            fields.len()
        )));
    }

    let field = |idx: usize| fields.get(idx).copied().unwrap_or(0);
    let (user, nice, system, idle) = (field(0), field(1), field(2), field(3));
    let (iowait, irq, softirq, steal) = (field(4), field(5), field(6), field(7));

    let idle_total = idle.saturating_add(iowait);
    let kernel = [system, irq, softirq, steal, idle_total]
        .into_iter()
        .fold(0u64, u64::saturating_add);

    Ok(TimeSnapshot::new(idle_total, kernel, user.saturating_add(nice)))
}
