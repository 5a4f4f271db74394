//! Lifecycle controller
//!
//! Owns the listener for the lifetime of the service and feeds the
//! lifecycle state machine with listener and control events, reporting
//! every status change to the injected [`ServiceHost`].

use cpumon_application::{Lifecycle, LifecycleAction, LifecycleEvent};
use cpumon_domain::constants::LISTENER_FAILURE_EXIT_CODE;
use cpumon_domain::error::Result;
use cpumon_domain::ports::ServiceHost;
use cpumon_domain::value_objects::{ControlRequest, ServiceStatus};
use tracing::{debug, error, info, warn};

use crate::listener::{MetricsListener, RunningListener};

/// What woke the control loop
enum Wake {
    Control(ControlRequest),
    ListenerExited(cpumon_domain::error::Error),
}

/// Runs the service lifecycle around a metrics listener
#[derive(Debug, Default)]
pub struct LifecycleController {
    lifecycle: Lifecycle,
}

impl LifecycleController {
    /// Controller in the `StartPending` state
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the listener, serve until stopped, and tear it down
    ///
    /// Returns `Err` only when the listener fails to start or dies on its
    /// own; a slow or failed drain during shutdown is logged.
    pub async fn run<H>(mut self, host: &mut H, listener: MetricsListener) -> Result<()>
    where
        H: ServiceHost + ?Sized,
    {
        self.report(host, self.lifecycle.status());
        info!("Service starting");

        let mut running = match listener.start().await {
            Ok(running) => running,
            Err(e) => {
                error!(error = %e, "Failed to start listener");
                self.lifecycle.apply(LifecycleEvent::ListenerStopped);
                let status = self
                    .lifecycle
                    .status()
                    .with_exit_code(LISTENER_FAILURE_EXIT_CODE);
                self.report(host, status);
                return Err(e);
            }
        };

        self.handle(host, LifecycleEvent::ListenerStarted);
        info!(address = %running.local_addr(), "Service running");

        loop {
            let wake = tokio::select! {
                control = host.await_control() => {
                    // No supervisor left to send a stop; stop now
                    Wake::Control(control.unwrap_or(ControlRequest::Stop))
                }
                e = running.exited() => Wake::ListenerExited(e),
            };

            match wake {
                Wake::Control(request) => {
                    let action = self.handle(host, LifecycleEvent::Control(request));
                    if action == LifecycleAction::BeginShutdown {
                        break;
                    }
                }
                Wake::ListenerExited(e) => {
                    error!(error = %e, "Listener exited while running");
                    self.lifecycle.apply(LifecycleEvent::ListenerStopped);
                    let status = self
                        .lifecycle
                        .status()
                        .with_exit_code(LISTENER_FAILURE_EXIT_CODE);
                    self.report(host, status);
                    return Err(e);
                }
            }
        }

        info!("Service stopping");
        self.stop_listener(running).await;
        self.handle(host, LifecycleEvent::ListenerStopped);
        info!("Service stopped");
        Ok(())
    }

    async fn stop_listener(&self, running: RunningListener) {
        if let Err(e) = running.shutdown().await {
            warn!(error = %e, "Listener shutdown did not complete cleanly");
        }
    }

    /// Apply an event and perform the resulting action
    fn handle<H>(&mut self, host: &mut H, event: LifecycleEvent) -> LifecycleAction
    where
        H: ServiceHost + ?Sized,
    {
        let transition = self.lifecycle.apply(event);
        match transition.action {
            LifecycleAction::Report | LifecycleAction::BeginShutdown => {
                self.report(host, self.lifecycle.status());
            }
            LifecycleAction::Unexpected(code) => {
                error!(code, state = %transition.from, "Unexpected control request");
            }
            LifecycleAction::Ignore => {
                debug!(?event, state = %transition.from, "Event ignored");
            }
        }
        transition.action
    }

    fn report<H>(&self, host: &mut H, status: ServiceStatus)
    where
        H: ServiceHost + ?Sized,
    {
        if let Err(e) = host.report_status(status) {
            warn!(error = %e, state = %status.state, "Failed to report service status");
        }
    }
}
