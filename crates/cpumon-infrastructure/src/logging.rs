//! Structured logging with tracing
//!
//! One global subscriber: an [`EnvFilter`] (from `CPUMON_LOG`, falling back
//! to the configured level) in front of a console sink and, when a log file
//! is configured, a daily-rolling file sink. Supervised runs have no console,
//! so [`LoggingConfig::for_service`] points the file sink at a default path.

use std::path::Path;

use cpumon_domain::error::{Error, Result};
use tracing::{Level, Subscriber, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

pub use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_FILTER_ENV};
use crate::error_ext::ErrorContext;

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Install the global subscriber
///
/// Fails on an invalid level, an unwritable log directory, or when a global
/// subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let sinks = sink_layers(&config)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(sinks)
        .try_init()
        .map_err(|e| Error::Configuration {
            message: "Failed to install global tracing subscriber".to_string(),
            source: Some(Box::new(e)),
        })?;

    info!(%level, file = ?config.file_output, "Logging initialized");
    Ok(())
}

/// Console sink plus the optional rolling file sink
fn sink_layers<S>(config: &LoggingConfig) -> Result<Vec<BoxedLayer<S>>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let console = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);
    let mut layers: Vec<BoxedLayer<S>> = vec![if config.json_format {
        console.json().boxed()
    } else {
        console.boxed()
    }];

    if let Some(path) = &config.file_output {
        let (dir, file_name) = split_log_path(path);
        std::fs::create_dir_all(dir)
            .io_context(format!("Failed to create log directory {}", dir.display()))?;
        let appender = tracing_appender::rolling::daily(dir, file_name);

        let file = fmt::layer()
            .with_writer(appender)
            .with_ansi(false)
            .with_target(true);
        layers.push(if config.json_format {
            file.json().boxed()
        } else {
            file.boxed()
        });
    }

    Ok(layers)
}

/// Directory and file name prefix for the rolling appender
fn split_log_path(path: &Path) -> (&Path, &std::ffi::OsStr) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new(DEFAULT_LOG_FILE_STEM));
    (dir, file_name)
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
