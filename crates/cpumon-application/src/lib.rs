//! Application Layer - CPU Monitor
//!
//! The two pieces of the monitor that carry real invariants:
//!
//! - [`sampler`]: turns successive processor time snapshots into a
//!   utilization percentage, keeping a lock-guarded baseline.
//! - [`lifecycle`]: the service state machine, expressed as a pure
//!   transition function so it can be driven by any service host.
//!
//! ## Dependencies
//!
//! This crate depends only on `cpumon-domain` plus the async runtime and
//! logging facade. Host counters and supervisors are injected through the
//! domain ports.

pub mod lifecycle;
pub mod sampler;

pub use lifecycle::{Lifecycle, LifecycleAction, LifecycleEvent, Transition, transition};
pub use sampler::{Sampler, SamplerState};
