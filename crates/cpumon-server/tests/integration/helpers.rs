//! Shared fixtures for lifecycle integration tests

use cpumon_domain::value_objects::{ServiceStatus, TimeSnapshot};
use cpumon_infrastructure::config::{AppConfig, ConfigBuilder, ServerConfig};
use cpumon_infrastructure::host::ScriptedTimeSource;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

/// Port that was free a moment ago
pub fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map(|addr| addr.port())
        .expect("ephemeral port")
}

/// Localhost configuration on `port` with the given grace period
pub fn test_config(port: u16, grace_secs: u64) -> AppConfig {
    ConfigBuilder::new()
        .with_server(ServerConfig {
            shutdown_grace_secs: grace_secs,
            ..ServerConfig::localhost(port)
        })
        .build()
}

/// Counters for priming plus one request measuring 80%
///
/// Priming reads the first two; the first request sees system 100 -> 140
/// and idle 100 -> 110.
pub fn reference_source() -> Arc<ScriptedTimeSource> {
    Arc::new(ScriptedTimeSource::new([
        TimeSnapshot::new(0, 0, 0),
        TimeSnapshot::new(100, 150, 50),
        TimeSnapshot::new(110, 180, 70),
    ]))
}

/// Next status reported by the controller
pub async fn next_status(statuses: &mut UnboundedReceiver<ServiceStatus>) -> ServiceStatus {
    tokio::time::timeout(Duration::from_secs(10), statuses.recv())
        .await
        .expect("status reported in time")
        .expect("status channel open")
}

/// URL of the metrics route on `port`
pub fn cpu_url(port: u16) -> String {
    format!("http://127.0.0.1:{port}/cpu")
}

/// Whether connecting to `port` is refused at some point within `deadline`
pub async fn refuses_connections(port: u16, deadline: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < deadline {
        if tokio::net::TcpStream::connect(("127.0.0.1", port)).await.is_err() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}
