//! Service lifecycle value tests

use cpumon_domain::{ServiceState, ServiceStatus};

#[test]
fn test_only_running_accepts_stop() {
    assert!(!ServiceState::StartPending.accepts_stop());
    assert!(ServiceState::Running.accepts_stop());
    assert!(!ServiceState::StopPending.accepts_stop());
    assert!(!ServiceState::Stopped.accepts_stop());
}

#[test]
fn test_stopped_is_terminal() {
    assert!(ServiceState::Stopped.is_terminal());
    assert!(!ServiceState::StopPending.is_terminal());
}

#[test]
fn test_status_for_state() {
    let status = ServiceStatus::for_state(ServiceState::Running);
    assert_eq!(status.state, ServiceState::Running);
    assert!(status.accepts_stop);
    assert_eq!(status.exit_code, 0);

    let stopped = ServiceStatus::for_state(ServiceState::Stopped).with_exit_code(1);
    assert!(!stopped.accepts_stop);
    assert_eq!(stopped.exit_code, 1);
}

#[test]
fn test_state_display() {
    assert_eq!(ServiceState::StopPending.to_string(), "stop-pending");
    assert_eq!(ServiceState::default(), ServiceState::StartPending);
}
