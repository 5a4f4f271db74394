//! Logging configuration tests

use std::path::PathBuf;

use cpumon_infrastructure::config::{LoggingConfig, default_service_log_path};
use cpumon_infrastructure::logging::parse_log_level;
use tracing::Level;

#[test]
fn test_parse_log_level_accepts_known_levels() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("Error").unwrap(), Level::ERROR);
}

#[test]
fn test_parse_log_level_rejects_unknown() {
    let err = parse_log_level("verbose").unwrap_err();
    assert!(err.to_string().contains("Invalid log level: verbose"));
}

#[test]
fn test_service_logging_defaults_to_data_dir_file() {
    let logging = LoggingConfig::default().for_service();
    let path = logging.file_output.expect("service logging writes to a file");

    assert_eq!(path, default_service_log_path());
    assert!(path.ends_with("cpumon/logs/cpumon.log"));
}

#[test]
fn test_service_logging_keeps_explicit_file() {
    let explicit = PathBuf::from("/var/log/cpumon/monitor.log");
    let logging = LoggingConfig {
        file_output: Some(explicit.clone()),
        ..LoggingConfig::default()
    }
    .for_service();

    assert_eq!(logging.file_output, Some(explicit));
}
