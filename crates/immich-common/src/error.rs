//! Error types and utilities for the Immich stats client

use thiserror::Error;

/// Result type alias for Immich operations
pub type Result<T> = std::result::Result<T, ImmichError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for Immich operations
///
/// Each request stage has its own variant so callers can tell where a call
/// failed. The underlying cause is kept as the error source.
#[derive(Error, Debug)]
pub enum ImmichError {
    /// The request could not be built (malformed URL, invalid header value)
    #[error("Request error: {message}")]
    Request {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Transport failures (DNS, connection refused, TLS, timeout)
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// The server answered with something other than 200 OK
    #[error("Immich API error: unexpected status code {status_code} from {endpoint}")]
    Status { status_code: u16, endpoint: String },

    /// The response body could not be read to the end
    #[error("Failed reading API response body (status {status_code}): {message}")]
    Body {
        message: String,
        status_code: u16,
        #[source]
        source: Option<BoxedSource>,
    },

    /// The body was not valid JSON for the expected shape
    #[error("Failed to decode API response: {body}")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors for configuration values
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Logging could not be initialized
    #[error("Logging error: {message}")]
    Logging {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl ImmichError {
    /// Create a new request construction error with source
    pub fn request_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Request {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new network error with source
    pub fn network_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new unexpected status error
    pub fn status(status_code: u16, endpoint: impl Into<String>) -> Self {
        Self::Status {
            status_code,
            endpoint: endpoint.into(),
        }
    }

    /// Create a new body read error with source
    pub fn body_with_source(
        msg: impl Into<String>,
        status_code: u16,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Body {
            message: msg.into(),
            status_code,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new decode error carrying the raw body
    pub fn decode(body: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            body: body.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new logging error with source
    pub fn logging_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Logging {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// HTTP status code attached to the error, if the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status_code, .. } | Self::Body { status_code, .. } => {
                Some(*status_code)
            }
            _ => None,
        }
    }

    /// Raw response body for decode failures
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::Decode { body, .. } => Some(body),
            _ => None,
        }
    }
}

// Error conversion implementations for external types

/// Convert from reqwest::Error to ImmichError
impl From<reqwest::Error> for ImmichError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::request_with_source("Failed to build request", err)
        } else if err.is_timeout() {
            Self::network_with_source("Request timeout", err)
        } else if err.is_connect() {
            Self::network_with_source("Connection failed", err)
        } else {
            Self::network_with_source("Failed to execute API request", err)
        }
    }
}

/// Convert from serde_yaml::Error to ImmichError
impl From<serde_yaml::Error> for ImmichError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::config_with_source("YAML parsing error", err)
    }
}
