//! Utilization payload served over HTTP

use serde::{Deserialize, Serialize};

/// Body of the `/cpu` response
///
/// `error` is only serialized when the sample failed, in which case
/// `utilization` is `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuUsage {
    /// Host-wide utilization percentage in `[0, 100]`
    pub utilization: f64,
    /// Why the measurement failed, if it did
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CpuUsage {
    /// A successful measurement
    pub fn measured(utilization: f64) -> Self {
        Self {
            utilization,
            error: None,
        }
    }

    /// A failed measurement, reported as idle
    pub fn failed<S: Into<String>>(reason: S) -> Self {
        Self {
            utilization: 0.0,
            error: Some(reason.into()),
        }
    }

    /// Whether the measurement failed
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}
