//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the CPU monitor
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The host processor time counters could not be read
    #[error("Host time source error: {message}")]
    HostTime {
        /// Description of the failure
        message: String,
    },

    /// The HTTP listener failed to bind or terminated unexpectedly
    #[error("Listener error: {message}")]
    Listener {
        /// Description of the listener failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Graceful shutdown did not complete cleanly
    #[error("Shutdown error: {message}")]
    Shutdown {
        /// Description of the shutdown failure
        message: String,
    },

    /// Communication with the service control manager failed
    #[error("Service host error: {message}")]
    Service {
        /// Description of the service host failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation not available on this platform
    #[error("Unsupported: {message}")]
    Unsupported {
        /// What is not supported
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl Error {
    /// Create a host time source error
    pub fn host_time<S: Into<String>>(message: S) -> Self {
        Self::HostTime {
            message: message.into(),
        }
    }

    /// Create a configuration error without a source
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a listener error without a source
    pub fn listener<S: Into<String>>(message: S) -> Self {
        Self::Listener {
            message: message.into(),
            source: None,
        }
    }

    /// Create a listener error wrapping the underlying cause
    pub fn listener_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Listener {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a shutdown error
    pub fn shutdown<S: Into<String>>(message: S) -> Self {
        Self::Shutdown {
            message: message.into(),
        }
    }

    /// Create an unsupported-platform error
    pub fn unsupported<S: Into<String>>(message: S) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the error came from reading host counters
    pub fn is_host_time(&self) -> bool {
        matches!(self, Self::HostTime { .. } | Self::Unsupported { .. })
    }
}
