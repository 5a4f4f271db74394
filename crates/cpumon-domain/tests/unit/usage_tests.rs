//! Utilization payload tests

use cpumon_domain::CpuUsage;

#[test]
fn test_measured_payload_has_single_field() {
    let json = serde_json::to_value(CpuUsage::measured(80.0)).unwrap();

    assert_eq!(json, serde_json::json!({ "utilization": 80.0 }));
}

#[test]
fn test_failed_payload_reports_zero_and_reason() {
    let usage = CpuUsage::failed("counters unavailable");
    assert!(usage.is_failure());

    let json = serde_json::to_value(&usage).unwrap();
    assert_eq!(json["utilization"], 0.0);
    assert_eq!(json["error"], "counters unavailable");
}

#[test]
fn test_payload_without_error_deserializes() {
    let usage: CpuUsage = serde_json::from_str(r#"{"utilization": 12.5}"#).unwrap();
    assert_eq!(usage, CpuUsage::measured(12.5));
}
