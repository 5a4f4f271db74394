//! Configuration loading tests
//!
//! Environment-dependent cases run inside `figment::Jail`, which isolates
//! the process environment and working directory per test.

use cpumon_domain::constants::{DEFAULT_HTTP_PORT, DEFAULT_SERVICE_NAME};
use cpumon_infrastructure::config::{AppConfig, ConfigLoader, ServerConfig};
use figment::Jail;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults_match_documented_values() {
    let config = AppConfig::default();

    assert_eq!(config.server.port, DEFAULT_HTTP_PORT);
    assert_eq!(config.server.port, 8899);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.shutdown_grace(), Duration::from_secs(5));
    assert_eq!(config.service.name, DEFAULT_SERVICE_NAME);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_load_from_explicit_file() {
    Jail::expect_with(|_jail| {
        let file = write_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9100
            shutdown_grace_secs = 2

            [logging]
            level = "debug"
            "#,
        );

        let config = ConfigLoader::new()
            .with_config_path(file.path())
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.shutdown_grace_secs, 2);
        assert_eq!(config.logging.level, "debug");
        // Untouched sections keep their defaults
        assert_eq!(config.service.name, DEFAULT_SERVICE_NAME);
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    Jail::expect_with(|jail| {
        let missing = jail.directory().join("does-not-exist.toml");

        let config = ConfigLoader::new()
            .with_config_path(missing)
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config, AppConfig::default());
        Ok(())
    });
}

#[test]
fn test_default_file_discovered_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file("cpumon.toml", "[server]\nport = 9200\n")?;

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.server.port, 9200);
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("cpumon.toml", "[server]\nport = 9200\n")?;
        jail.set_env("CPUMON_SERVER__PORT", "9300");
        jail.set_env("CPUMON_SERVER__SHUTDOWN_GRACE_SECS", "7");
        jail.set_env("CPUMON_SERVICE__NAME", "CpuMonitorDev");

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.server.port, 9300);
        assert_eq!(config.server.shutdown_grace_secs, 7);
        assert_eq!(config.service.name, "CpuMonitorDev");
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("CPUMON_SERVER__PORT", "9300");
        jail.set_env("MONITOR_SERVER__PORT", "9400");

        let config = ConfigLoader::new()
            .with_env_prefix("MONITOR")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.server.port, 9400);
        Ok(())
    });
}

#[test]
fn test_validation_rejects_zero_port() {
    Jail::expect_with(|jail| {
        jail.set_env("CPUMON_SERVER__PORT", "0");

        let result = ConfigLoader::new().load();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("port cannot be 0"));
        Ok(())
    });
}

#[test]
fn test_validation_rejects_bad_host_grace_and_level() {
    Jail::expect_with(|jail| {
        jail.create_file("cpumon.toml", "[server]\nhost = \"not-an-ip\"\n")?;
        assert!(ConfigLoader::new().load().is_err());

        jail.create_file("cpumon.toml", "[server]\nshutdown_grace_secs = 0\n")?;
        assert!(ConfigLoader::new().load().is_err());

        jail.create_file("cpumon.toml", "[logging]\nlevel = \"loud\"\n")?;
        assert!(ConfigLoader::new().load().is_err());

        jail.create_file("cpumon.toml", "[service]\nname = \"  \"\n")?;
        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn test_server_ip_addr() {
    let config = ServerConfig::localhost(8899);
    assert_eq!(config.ip_addr().unwrap().to_string(), "127.0.0.1");

    let bad = ServerConfig {
        host: "localhost:80".to_string(),
        ..ServerConfig::default()
    };
    assert!(bad.ip_addr().is_err());
}
