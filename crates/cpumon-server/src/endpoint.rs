//! Metrics endpoint
//!
//! A single route, `GET /cpu`, answering `{"utilization": <f64>}`. Each
//! request takes a fresh sample; a failed sample still answers 200 with
//! `0.0` and an `error` field.

use std::sync::Arc;

use cpumon_application::Sampler;
use cpumon_domain::error::Result;
use cpumon_domain::value_objects::CpuUsage;
use cpumon_infrastructure::config::ServerConfig;
use rocket::config::{Config as RocketConfig, LogLevel, Shutdown};
use rocket::serde::json::Json;
use rocket::{Build, Rocket, State};

/// Current host-wide CPU utilization
#[get("/cpu")]
pub fn cpu(sampler: &State<Arc<Sampler>>) -> Json<CpuUsage> {
    Json(sampler.measure())
}

/// Build the Rocket application serving the metrics route
///
/// The result still carries Rocket's default figment; apply
/// [`rocket_config`] with `configure` before launching it for real.
pub fn metrics_rocket(sampler: Arc<Sampler>) -> Rocket<Build> {
    rocket::build()
        .manage(sampler)
        .mount("/", routes![cpu])
}

/// Rocket configuration for the listener
///
/// Rocket's own signal handling is disabled: stop requests arrive through
/// the service host and are turned into a shutdown by the controller, which
/// also enforces the grace deadline.
pub fn rocket_config(config: &ServerConfig) -> Result<RocketConfig> {
    let grace = u32::try_from(config.shutdown_grace_secs).unwrap_or(u32::MAX);

    #[allow(unused_mut)]
    let mut shutdown = Shutdown {
        ctrlc: false,
        grace,
        mercy: 0,
        force: false,
        ..Shutdown::default()
    };
    #[cfg(unix)]
    shutdown.signals.clear();

    Ok(RocketConfig {
        address: config.ip_addr()?,
        port: config.port,
        log_level: LogLevel::Critical,
        shutdown,
        ..RocketConfig::default()
    })
}
