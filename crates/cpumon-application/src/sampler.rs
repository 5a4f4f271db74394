//! CPU utilization sampler
//!
//! Computes host-wide utilization from the difference between the current
//! processor time snapshot and the one seen on the previous call.
//!
//! ```text
//! system   = kernel + user - idle
//! util (%) = 100 * Δsystem / (Δsystem + Δidle)
//! ```
//!
//! The baseline is owned by the [`Sampler`] and guarded by a mutex, so
//! concurrent callers are linearized and never observe a torn baseline.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use cpumon_domain::constants::{FALLBACK_PROCESSOR_COUNT, MAX_UTILIZATION};
use cpumon_domain::error::Result;
use cpumon_domain::ports::SharedHostTimeSource;
use cpumon_domain::value_objects::{CpuUsage, TimeSnapshot};
use tracing::{debug, error, trace};

/// Baseline carried between samples
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SamplerState {
    /// Cumulative idle time at the last sample
    pub last_idle: u64,
    /// Cumulative busy time (`kernel + user - idle`) at the last sample
    pub last_total: u64,
}

impl SamplerState {
    /// Fold a new snapshot into the baseline and return the utilization
    /// over the interval since the previous snapshot.
    ///
    /// The baseline is replaced even when the interval is degenerate.
    pub fn advance(&mut self, snapshot: TimeSnapshot) -> f64 {
        let system_time = snapshot.system_time();

        let idle_diff = i128::from(snapshot.idle) - i128::from(self.last_idle);
        let system_diff = i128::from(system_time) - i128::from(self.last_total);

        self.last_idle = snapshot.idle;
        self.last_total = system_time;

        if system_diff <= 0 {
            // First call, counter reset, or two calls within one tick
            debug!(system_diff, idle_diff, "Degenerate sampling interval");
            return 0.0;
        }

        let utilization =
            MAX_UTILIZATION * (system_diff as f64 / (system_diff + idle_diff) as f64);

        // idle_diff can dip negative when the counters are read with skew
        utilization.clamp(0.0, MAX_UTILIZATION)
    }
}

/// Host-wide CPU utilization sampler
pub struct Sampler {
    source: SharedHostTimeSource,
    state: Mutex<SamplerState>,
}

impl Sampler {
    /// Create a sampler with an empty baseline
    pub fn new(source: SharedHostTimeSource) -> Self {
        Self {
            source,
            state: Mutex::new(SamplerState::default()),
        }
    }

    /// Take a sample, surfacing host counter failures
    ///
    /// On failure the baseline is left untouched.
    pub fn try_sample(&self) -> Result<f64> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        let processors = match self.source.processor_count() {
            0 => FALLBACK_PROCESSOR_COUNT,
            n => n,
        };
        trace!(processors, "Sampling processor times");

        // One /proc/stat read or GetSystemTimes call. Held under the lock so
        // reading and advancing the baseline happen as one step.
        let snapshot = self.source.read_processor_times()?;
        Ok(state.advance(snapshot))
    }

    /// Take a sample and wrap it in the HTTP payload
    ///
    /// Failures are logged and reported as `0.0` with the reason attached.
    pub fn measure(&self) -> CpuUsage {
        match self.try_sample() {
            Ok(utilization) => CpuUsage::measured(utilization),
            Err(e) => {
                error!(error = %e, "Error getting system times");
                CpuUsage::failed(e.to_string())
            }
        }
    }

    /// Take a sample; failures read as `0.0`
    pub fn sample(&self) -> f64 {
        self.measure().utilization
    }

    /// Establish a baseline before serving traffic
    ///
    /// Samples, waits `delay`, and samples again so the first client-visible
    /// value covers a real interval instead of the time since boot.
    pub async fn prime(&self, delay: Duration) {
        let first = self.sample();
        tokio::time::sleep(delay).await;
        let second = self.sample();
        debug!(first, second, "Sampler primed");
    }

    /// Current baseline
    pub fn baseline(&self) -> SamplerState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Sampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sampler")
            .field("baseline", &self.baseline())
            .finish_non_exhaustive()
    }
}
