//! Service Host Port
//!
//! The lifecycle controller talks to whatever supervises the process
//! through this interface: a service control manager, process signals, or
//! a test harness.

use crate::error::Result;
use crate::value_objects::{ControlRequest, ServiceStatus};
use async_trait::async_trait;

/// Supervisor capability injected into the lifecycle controller
#[async_trait]
pub trait ServiceHost: Send {
    /// Publish the current status to the supervisor
    fn report_status(&mut self, status: ServiceStatus) -> Result<()>;

    /// Wait for the next control request
    ///
    /// Returns `None` once the supervisor can no longer deliver requests;
    /// the controller treats that as a stop.
    async fn await_control(&mut self) -> Option<ControlRequest>;
}
