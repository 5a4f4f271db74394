//! Channel-driven service host

use async_trait::async_trait;
use cpumon_domain::error::Result;
use cpumon_domain::ports::ServiceHost;
use cpumon_domain::value_objects::{ControlRequest, ServiceStatus};
use tokio::sync::mpsc;

/// Callback that publishes a status to the supervisor
pub type StatusReporter = Box<dyn FnMut(ServiceStatus) -> Result<()> + Send>;

/// Sending half of a control channel
///
/// Cheap to clone and usable from synchronous callbacks such as a service
/// control handler.
#[derive(Debug, Clone)]
pub struct ControlSender(mpsc::UnboundedSender<ControlRequest>);

impl ControlSender {
    /// Deliver a control request; `false` if the host is gone
    pub fn send(&self, request: ControlRequest) -> bool {
        self.0.send(request).is_ok()
    }
}

/// Receiving half of a control channel
#[derive(Debug)]
pub struct ControlReceiver(mpsc::UnboundedReceiver<ControlRequest>);

/// Create a control channel
pub fn control_channel() -> (ControlSender, ControlReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ControlSender(tx), ControlReceiver(rx))
}

/// Service host backed by a control channel and a status reporter
pub struct ChannelServiceHost {
    controls: ControlReceiver,
    reporter: StatusReporter,
}

impl ChannelServiceHost {
    /// Host reading `controls` and publishing through `reporter`
    pub fn new(controls: ControlReceiver, reporter: StatusReporter) -> Self {
        Self { controls, reporter }
    }

    /// Host whose statuses are forwarded to an observable channel
    pub fn observed() -> (
        Self,
        ControlSender,
        mpsc::UnboundedReceiver<ServiceStatus>,
    ) {
        let (sender, receiver) = control_channel();
        let (status_tx, status_rx) = mpsc::unbounded_channel();
        let reporter: StatusReporter = Box::new(move |status| {
            // Observer may have been dropped
            let _ = status_tx.send(status);
            Ok(())
        });
        (Self::new(receiver, reporter), sender, status_rx)
    }
}

impl std::fmt::Debug for ChannelServiceHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelServiceHost")
            .field("controls", &self.controls)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ServiceHost for ChannelServiceHost {
    fn report_status(&mut self, status: ServiceStatus) -> Result<()> {
        (self.reporter)(status)
    }

    async fn await_control(&mut self) -> Option<ControlRequest> {
        self.controls.0.recv().await
    }
}
