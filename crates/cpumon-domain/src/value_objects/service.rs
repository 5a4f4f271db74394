//! Service lifecycle values
//!
//! These mirror what a service control manager understands, without tying
//! the domain to any platform API.

use serde::{Deserialize, Serialize};

/// State reported to the service host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ServiceState {
    /// Listener is being started
    #[default]
    StartPending,
    /// Listener is serving requests
    Running,
    /// Listener is draining in-flight requests
    StopPending,
    /// Listener is gone
    Stopped,
}

impl ServiceState {
    /// Whether a stop request is honored in this state
    pub fn accepts_stop(self) -> bool {
        matches!(self, Self::Running)
    }

    /// Whether no further transitions can happen
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Stopped)
    }
}

impl std::fmt::Display for ServiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::StartPending => "start-pending",
            Self::Running => "running",
            Self::StopPending => "stop-pending",
            Self::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// Control request delivered by the service host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlRequest {
    /// Stop the service (supervisor stop, SIGINT or SIGTERM)
    Stop,
    /// Report the current status again
    Interrogate,
    /// Any other control code, carried as the raw value
    Other(u32),
}

/// Status snapshot pushed to the service host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Current state
    pub state: ServiceState,
    /// Whether stop requests are currently accepted
    pub accepts_stop: bool,
    /// Service-specific exit code, meaningful once stopped
    pub exit_code: u32,
}

impl ServiceStatus {
    /// Status for a state with the default exit code
    pub fn for_state(state: ServiceState) -> Self {
        Self {
            state,
            accepts_stop: state.accepts_stop(),
            exit_code: 0,
        }
    }

    /// Attach a service-specific exit code
    #[must_use]
    pub fn with_exit_code(mut self, exit_code: u32) -> Self {
        self.exit_code = exit_code;
        self
    }
}
