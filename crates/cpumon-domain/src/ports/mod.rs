//! Ports
//!
//! Capabilities the core consumes but does not implement. Adapters live in
//! `cpumon-infrastructure` (host counters, signal handling) and
//! `cpumon-server` (service control manager bridge).

pub mod host_time;
pub mod service_host;

pub use host_time::{HostTimeSource, SharedHostTimeSource};
pub use service_host::ServiceHost;
