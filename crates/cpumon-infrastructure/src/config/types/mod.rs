//! Configuration types module

pub mod app;
pub mod logging;
pub mod server;
pub mod service;

// Re-export main types
pub use app::*;
pub use logging::default_service_log_path;
