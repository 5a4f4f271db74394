//! Service lifecycle state machine
//!
//! ```text
//!   StartPending ──ListenerStarted──▶ Running ──Stop──▶ StopPending ──ListenerStopped──▶ Stopped
//!        │                               │
//!        └──────ListenerStopped──────────┴──────────────────────────────────────────────▶ Stopped
//! ```
//!
//! Transitions are computed by [`transition`], a pure function of the
//! current state and the incoming event. The controller that owns the
//! listener applies the returned [`LifecycleAction`]; nothing here touches
//! sockets or platform APIs.

use cpumon_domain::value_objects::{ControlRequest, ServiceState, ServiceStatus};
use tracing::debug;

/// Input to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The listener is bound and accepting connections
    ListenerStarted,
    /// The supervisor sent a control request
    Control(ControlRequest),
    /// The listener task is gone (shutdown finished, timed out, or failed)
    ListenerStopped,
}

/// What the controller must do after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    /// Publish the (possibly unchanged) status to the supervisor
    Report,
    /// Publish `StopPending` and shut the listener down
    BeginShutdown,
    /// Log an unrecognized control code; state is unchanged
    Unexpected(u32),
    /// Nothing to do
    Ignore,
}

/// Result of feeding one event to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State before the event
    pub from: ServiceState,
    /// State after the event
    pub to: ServiceState,
    /// Side effect the controller must perform
    pub action: LifecycleAction,
}

impl Transition {
    fn stay(state: ServiceState, action: LifecycleAction) -> Self {
        Self {
            from: state,
            to: state,
            action,
        }
    }

    fn go(from: ServiceState, to: ServiceState, action: LifecycleAction) -> Self {
        Self { from, to, action }
    }

    /// Whether the state changed
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Transition table
pub fn transition(state: ServiceState, event: LifecycleEvent) -> Transition {
    use LifecycleAction::{BeginShutdown, Ignore, Report, Unexpected};
    use LifecycleEvent::{Control, ListenerStarted, ListenerStopped};
    use ServiceState::{Running, StartPending, StopPending, Stopped};

    match (state, event) {
        (Stopped, _) => Transition::stay(Stopped, Ignore),

        (_, Control(ControlRequest::Other(code))) => Transition::stay(state, Unexpected(code)),
        (_, Control(ControlRequest::Interrogate)) => Transition::stay(state, Report),

        (StartPending, ListenerStarted) => Transition::go(StartPending, Running, Report),
        (Running, Control(ControlRequest::Stop)) => {
            Transition::go(Running, StopPending, BeginShutdown)
        }
        (_, ListenerStopped) => Transition::go(state, Stopped, Report),

        // Stop is only accepted while running; a repeated stop or a late
        // listener notification changes nothing.
        (StartPending | StopPending, Control(ControlRequest::Stop))
        | (Running | StopPending, ListenerStarted) => Transition::stay(state, Ignore),
    }
}

/// Owned lifecycle state
#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    state: ServiceState,
}

impl Lifecycle {
    /// Start in `StartPending`
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> ServiceState {
        self.state
    }

    /// Status to report for the current state
    pub fn status(&self) -> ServiceStatus {
        ServiceStatus::for_state(self.state)
    }

    /// Feed an event and move to the resulting state
    pub fn apply(&mut self, event: LifecycleEvent) -> Transition {
        let transition = transition(self.state, event);
        if transition.changed() {
            debug!(from = %transition.from, to = %transition.to, ?event, "Service state changed");
        }
        self.state = transition.to;
        transition
    }
}
