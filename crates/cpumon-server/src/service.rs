//! Windows service control manager bridge
//!
//! The SCM calls `service_main` on a thread of its own. That thread blocks
//! on the tokio runtime started by `main` and runs the same lifecycle
//! controller as standalone mode, with a [`ChannelServiceHost`] fed by the
//! SCM control handler.

use std::ffi::OsString;
use std::sync::OnceLock;
use std::time::Duration;

use cpumon_domain::error::{Error, Result};
use cpumon_domain::value_objects::{ControlRequest, ServiceState, ServiceStatus};
use cpumon_infrastructure::config::AppConfig;
use cpumon_infrastructure::service_host::{ChannelServiceHost, StatusReporter, control_channel};
use tokio::runtime::Handle;
use tracing::{error, info};
use windows_service::service::{
    ServiceControl, ServiceControlAccept, ServiceExitCode, ServiceState as ScmState,
    ServiceStatus as ScmStatus, ServiceType,
};
use windows_service::service_control_handler::{self, ServiceControlHandlerResult};
use windows_service::{define_windows_service, service_dispatcher};

use crate::init::serve;

/// Extra time the SCM should allow for a pending state
const PENDING_WAIT_SLACK: Duration = Duration::from_secs(2);

/// Configuration and runtime handed to the SCM-owned service thread
static SERVICE_CONTEXT: OnceLock<(AppConfig, Handle)> = OnceLock::new();

#[allow(unsafe_code)]
mod ffi {
    use super::{OsString, define_windows_service};

    define_windows_service!(ffi_service_main, service_main);

    fn service_main(arguments: Vec<OsString>) {
        super::service_main(arguments);
    }
}

/// Hand control to the service dispatcher
///
/// Blocks (off the async workers) until the service has stopped. Fails when
/// the process was not started by the SCM.
pub async fn run_dispatcher(config: AppConfig) -> Result<()> {
    let name = config.service.name.clone();
    SERVICE_CONTEXT
        .set((config, Handle::current()))
        .map_err(|_| Error::internal("service dispatcher already started"))?;

    info!(service = %name, "Connecting to the service control manager");
    tokio::task::spawn_blocking(move || service_dispatcher::start(&name, ffi::ffi_service_main))
        .await
        .map_err(|e| Error::internal(format!("service dispatcher task failed: {e}")))?
        .map_err(|e| Error::Service {
            message: "Failed to start service dispatcher".to_string(),
            source: Some(Box::new(e)),
        })
}

fn service_main(_arguments: Vec<OsString>) {
    let Some((config, handle)) = SERVICE_CONTEXT.get() else {
        error!("Service started without a context");
        return;
    };

    if let Err(e) = run_service(config, handle) {
        error!(error = %e, "Service terminated with error");
    }
}

fn run_service(config: &AppConfig, handle: &Handle) -> Result<()> {
    let (controls, receiver) = control_channel();

    let event_handler = move |control: ServiceControl| -> ServiceControlHandlerResult {
        let request = match control {
            ServiceControl::Stop => ControlRequest::Stop,
            ServiceControl::Interrogate => ControlRequest::Interrogate,
            other => ControlRequest::Other(other.raw_value()),
        };
        if !controls.send(request) {
            return ServiceControlHandlerResult::Other(1);
        }
        match request {
            ControlRequest::Other(_) => ServiceControlHandlerResult::NotImplemented,
            _ => ServiceControlHandlerResult::NoError,
        }
    };

    let status_handle = service_control_handler::register(&config.service.name, event_handler)
        .map_err(|e| Error::Service {
            message: "Failed to register service control handler".to_string(),
            source: Some(Box::new(e)),
        })?;

    let wait_hint = config.server.shutdown_grace() + PENDING_WAIT_SLACK;
    let reporter: StatusReporter = Box::new(move |status| {
        status_handle
            .set_service_status(scm_status(status, wait_hint))
            .map_err(|e| Error::Service {
                message: format!("Failed to report {} to the SCM", status.state),
                source: Some(Box::new(e)),
            })
    });

    let mut host = ChannelServiceHost::new(receiver, reporter);
    handle.block_on(serve(config, &mut host))
}

/// Translate a lifecycle status into what the SCM expects
fn scm_status(status: ServiceStatus, wait_hint: Duration) -> ScmStatus {
    let current_state = match status.state {
        ServiceState::StartPending => ScmState::StartPending,
        ServiceState::Running => ScmState::Running,
        ServiceState::StopPending => ScmState::StopPending,
        ServiceState::Stopped => ScmState::Stopped,
    };
    let controls_accepted = if status.accepts_stop {
        ServiceControlAccept::STOP
    } else {
        ServiceControlAccept::empty()
    };
    let exit_code = match status.exit_code {
        0 => ServiceExitCode::Win32(0),
        code => ServiceExitCode::ServiceSpecific(code),
    };
    let pending = matches!(
        status.state,
        ServiceState::StartPending | ServiceState::StopPending
    );

    ScmStatus {
        service_type: ServiceType::OWN_PROCESS,
        current_state,
        controls_accepted,
        exit_code,
        checkpoint: 0,
        wait_hint: if pending { wait_hint } else { Duration::ZERO },
        process_id: None,
    }
}
