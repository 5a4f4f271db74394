//! # CPU Monitor Server
//!
//! Serves host-wide CPU utilization over HTTP and keeps the listener alive
//! across service control requests.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`endpoint`] | `GET /cpu` route and Rocket configuration |
//! | [`listener`] | Launches Rocket and shuts it down with a deadline |
//! | [`controller`] | Drives the lifecycle state machine against a service host |
//! | [`init`] | Startup: configuration, logging, mode selection |
//! | `service` | Windows service control manager bridge (Windows only) |
//!
//! ```rust,no_run
//! use cpumon_server::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Standalone: serve until SIGINT/SIGTERM
//!     run(None, true).await
//! }
//! ```

#[macro_use]
extern crate rocket;

pub mod controller;
pub mod endpoint;
pub mod init;
pub mod listener;
#[cfg(windows)]
pub mod service;

pub use controller::LifecycleController;
pub use endpoint::{metrics_rocket, rocket_config};
pub use init::{run, serve, serve_with_source};
pub use listener::{MetricsListener, RunningListener};
