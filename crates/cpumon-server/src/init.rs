//! Server initialization
//!
//! Loads configuration, installs logging, and starts the monitor in the
//! requested mode:
//!
//! - **Standalone** (`--run`): serves until SIGINT/SIGTERM (Ctrl+C on Windows).
//! - **Supervised** (default): on Windows, registers with the service control
//!   manager under `service.name`. Elsewhere the supervisor (systemd, launchd)
//!   talks to the process through termination signals, so the signal host
//!   is used there as well.

use std::path::Path;
use std::sync::Arc;

use cpumon_application::Sampler;
use cpumon_domain::constants::PRIME_DELAY;
use cpumon_domain::error::Result;
use cpumon_domain::ports::{ServiceHost, SharedHostTimeSource};
use cpumon_infrastructure::config::{AppConfig, ConfigLoader};
use cpumon_infrastructure::host::default_time_source;
use cpumon_infrastructure::logging::init_logging;
use cpumon_infrastructure::service_host::SignalServiceHost;
use tracing::info;

use crate::controller::LifecycleController;
use crate::endpoint::{metrics_rocket, rocket_config};
use crate::listener::MetricsListener;

/// Run the CPU monitor
///
/// `standalone` selects signal-driven operation; otherwise the process runs
/// as a supervised service.
pub async fn run(
    config_path: Option<&Path>,
    standalone: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let logging = if standalone {
        config.logging.clone()
    } else {
        config.logging.clone().for_service()
    };
    init_logging(logging)?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        standalone,
        "Starting CPU monitor"
    );

    if standalone {
        let mut host = SignalServiceHost::new();
        serve(&config, &mut host).await?;
        return Ok(());
    }

    run_supervised(config).await
}

#[cfg(windows)]
async fn run_supervised(config: AppConfig) -> std::result::Result<(), Box<dyn std::error::Error>> {
    crate::service::run_dispatcher(config).await?;
    Ok(())
}

#[cfg(not(windows))]
async fn run_supervised(config: AppConfig) -> std::result::Result<(), Box<dyn std::error::Error>> {
    info!(
        service = %config.service.name,
        "No service control manager on this platform, supervising via termination signals"
    );
    let mut host = SignalServiceHost::new();
    serve(&config, &mut host).await?;
    Ok(())
}

/// Load configuration from an optional path
fn load_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}

/// Serve host counters until `host` asks to stop
pub async fn serve<H>(config: &AppConfig, host: &mut H) -> Result<()>
where
    H: ServiceHost + ?Sized,
{
    serve_with_source(config, default_time_source(), host).await
}

/// Serve counters from `source` until `host` asks to stop
///
/// The sampler is primed before the listener starts, so the first request
/// measures a short recent interval rather than the time since boot.
pub async fn serve_with_source<H>(
    config: &AppConfig,
    source: SharedHostTimeSource,
    host: &mut H,
) -> Result<()>
where
    H: ServiceHost + ?Sized,
{
    let sampler = Arc::new(Sampler::new(source));
    sampler.prime(PRIME_DELAY).await;

    let rocket = metrics_rocket(sampler).configure(rocket_config(&config.server)?);
    let listener = MetricsListener::new(rocket, config.server.shutdown_grace());

    LifecycleController::new().run(host, listener).await
}
