//! Value objects
//!
//! Immutable values exchanged between the sampler, the HTTP endpoint and the
//! lifecycle controller.

pub mod service;
pub mod snapshot;
pub mod usage;

pub use service::{ControlRequest, ServiceState, ServiceStatus};
pub use snapshot::TimeSnapshot;
pub use usage::CpuUsage;
