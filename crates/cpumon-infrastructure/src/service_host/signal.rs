//! Signal-driven service host

use async_trait::async_trait;
use cpumon_domain::error::Result;
use cpumon_domain::ports::ServiceHost;
use cpumon_domain::value_objects::{ControlRequest, ServiceStatus};
use tracing::{error, info};

/// Service host fed by process interrupt/termination signals
///
/// Status reports only go to the log; there is nobody else to tell.
#[derive(Debug, Default)]
pub struct SignalServiceHost {
    last_status: Option<ServiceStatus>,
}

impl SignalServiceHost {
    /// Create the host
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent status reported by the controller
    pub fn last_status(&self) -> Option<ServiceStatus> {
        self.last_status
    }
}

#[async_trait]
impl ServiceHost for SignalServiceHost {
    fn report_status(&mut self, status: ServiceStatus) -> Result<()> {
        info!(
            state = %status.state,
            accepts_stop = status.accepts_stop,
            exit_code = status.exit_code,
            "Service status"
        );
        self.last_status = Some(status);
        Ok(())
    }

    async fn await_control(&mut self) -> Option<ControlRequest> {
        match wait_for_termination().await {
            Ok(signal) => {
                info!(signal, "Termination signal received, shutting down server");
                Some(ControlRequest::Stop)
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for termination signals");
                None
            }
        }
    }
}

#[cfg(unix)]
async fn wait_for_termination() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result.map(|()| "SIGINT"),
        _ = sigterm.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_termination() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await.map(|()| "Ctrl+C")
}
