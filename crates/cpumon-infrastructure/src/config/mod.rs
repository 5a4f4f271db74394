//! Configuration
//!
//! Layered configuration built with Figment:
//!
//! 1. Defaults from [`AppConfig::default()`] (port 8899, 5 s grace period)
//! 2. TOML file (`--config` path or `cpumon.toml` discovery)
//! 3. Environment variables prefixed with `CPUMON_`, nested keys split on
//!    `__` (for example `CPUMON_SERVER__PORT=9000`)

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
