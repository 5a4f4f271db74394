//! Lifecycle state machine tests

use cpumon_application::{Lifecycle, LifecycleAction, LifecycleEvent, transition};
use cpumon_domain::value_objects::{ControlRequest, ServiceState};

const STOP: LifecycleEvent = LifecycleEvent::Control(ControlRequest::Stop);
const INTERROGATE: LifecycleEvent = LifecycleEvent::Control(ControlRequest::Interrogate);

const LIVE_STATES: [ServiceState; 3] = [
    ServiceState::StartPending,
    ServiceState::Running,
    ServiceState::StopPending,
];

#[test]
fn test_happy_path() {
    let mut lifecycle = Lifecycle::new();
    assert_eq!(lifecycle.state(), ServiceState::StartPending);
    assert!(!lifecycle.status().accepts_stop);

    let started = lifecycle.apply(LifecycleEvent::ListenerStarted);
    assert_eq!(started.action, LifecycleAction::Report);
    assert_eq!(lifecycle.state(), ServiceState::Running);
    assert!(lifecycle.status().accepts_stop);

    let stopping = lifecycle.apply(STOP);
    assert_eq!(stopping.action, LifecycleAction::BeginShutdown);
    assert_eq!(lifecycle.state(), ServiceState::StopPending);
    assert!(!lifecycle.status().accepts_stop);

    let stopped = lifecycle.apply(LifecycleEvent::ListenerStopped);
    assert_eq!(stopped.action, LifecycleAction::Report);
    assert_eq!(lifecycle.state(), ServiceState::Stopped);
}

#[test]
fn test_interrogate_reports_without_moving() {
    for state in LIVE_STATES {
        let t = transition(state, INTERROGATE);
        assert_eq!(t.to, state);
        assert_eq!(t.action, LifecycleAction::Report);
        assert!(!t.changed());
    }
}

#[test]
fn test_unknown_control_is_flagged_and_ignored() {
    for state in LIVE_STATES {
        let t = transition(state, LifecycleEvent::Control(ControlRequest::Other(0x80)));
        assert_eq!(t.to, state);
        assert_eq!(t.action, LifecycleAction::Unexpected(0x80));
    }
}

#[test]
fn test_stop_only_honored_while_running() {
    let t = transition(ServiceState::StartPending, STOP);
    assert_eq!(t.to, ServiceState::StartPending);
    assert_eq!(t.action, LifecycleAction::Ignore);

    let t = transition(ServiceState::StopPending, STOP);
    assert_eq!(t.to, ServiceState::StopPending);
    assert_eq!(t.action, LifecycleAction::Ignore);
}

#[test]
fn test_late_listener_started_is_ignored() {
    for state in [ServiceState::Running, ServiceState::StopPending] {
        let t = transition(state, LifecycleEvent::ListenerStarted);
        assert_eq!(t.to, state);
        assert_eq!(t.action, LifecycleAction::Ignore);
    }
}

#[test]
fn test_listener_exit_stops_from_any_live_state() {
    for state in LIVE_STATES {
        let t = transition(state, LifecycleEvent::ListenerStopped);
        assert_eq!(t.from, state);
        assert_eq!(t.to, ServiceState::Stopped);
        assert_eq!(t.action, LifecycleAction::Report);
    }
}

#[test]
fn test_stopped_is_terminal() {
    let mut lifecycle = Lifecycle::new();
    lifecycle.apply(LifecycleEvent::ListenerStopped);
    assert!(lifecycle.state().is_terminal());

    for event in [LifecycleEvent::ListenerStarted, STOP, INTERROGATE] {
        assert_eq!(lifecycle.apply(event).action, LifecycleAction::Ignore);
        assert_eq!(lifecycle.state(), ServiceState::Stopped);
    }
}
