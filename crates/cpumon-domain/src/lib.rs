//! # CPU Monitor Domain
//!
//! Core types and contracts shared by every layer of the CPU monitor.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Processor time snapshots, utilization payloads, service states |
//! | [`ports`] | Capabilities injected from the outside (host time source, service host) |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Default port, grace period, service name and sampling constants |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{HostTimeSource, ServiceHost};
pub use value_objects::{ControlRequest, CpuUsage, ServiceState, ServiceStatus, TimeSnapshot};
