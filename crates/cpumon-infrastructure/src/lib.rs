//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns and adapters for the domain ports.
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (defaults, TOML, environment) |
//! | [`logging`] | Structured logging with tracing |
//! | [`constants`] | Centralized infrastructure constants |
//!
//! ### Adapters
//! | Module | Description |
//! |--------|-------------|
//! | [`host`] | Host processor time sources (`/proc/stat`, `GetSystemTimes`) |
//! | [`service_host`] | Signal-driven and channel-driven service hosts |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod host;
pub mod logging;
pub mod service_host;

// Re-export commonly used types
pub use error_ext::ErrorContext;
