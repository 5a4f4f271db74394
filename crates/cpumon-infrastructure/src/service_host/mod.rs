//! Service host adapters
//!
//! Implementations of the [`ServiceHost`](cpumon_domain::ports::ServiceHost)
//! port that do not need a platform service control manager:
//!
//! - [`SignalServiceHost`]: standalone mode, and supervisors that stop
//!   processes with signals (systemd, launchd). SIGINT/SIGTERM become `Stop`.
//! - [`ChannelServiceHost`]: control requests arrive over a channel and
//!   statuses go to a caller-supplied reporter. The Windows service bridge
//!   and the lifecycle tests are built on it.

pub mod channel;
pub mod signal;

pub use channel::{ChannelServiceHost, ControlReceiver, ControlSender, StatusReporter, control_channel};
pub use signal::SignalServiceHost;
