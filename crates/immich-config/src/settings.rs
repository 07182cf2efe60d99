//! Configuration structures

use immich_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Immich server connection settings
    pub immich: ImmichConfig,

    /// Logging configuration
    pub logging: LoggingSettings,
}

impl Config {
    /// Validate every section of the configuration
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.immich.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Immich server connection settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ImmichConfig {
    /// Base URL of the Immich API (e.g., "http://localhost:2283/api")
    #[validate(custom(
        function = "crate::validation::validate_http_url",
        message = "Immich URL must be an absolute http or https URL"
    ))]
    pub url: String,

    /// API key sent as `Authorization: Token <key>`
    #[validate(length(min = 1, message = "Immich API key cannot be empty"))]
    pub api_key: String,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300, message = "Timeout must be between 1 and 300 seconds"))]
    pub timeout_seconds: u64,

    /// Connection pool max idle connections per host
    #[validate(range(max = 100, message = "Idle pool size cannot exceed 100"))]
    pub max_idle_per_host: usize,

    /// Accept self-signed or otherwise invalid TLS certificates
    pub accept_invalid_certs: bool,
}

impl Default for ImmichConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:2283/api".to_string(),
            api_key: String::new(),
            timeout_seconds: 30,
            max_idle_per_host: 10,
            accept_invalid_certs: false,
        }
    }
}

impl ImmichConfig {
    /// Create a new configuration with the minimum required parameters
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the connection pool size
    pub fn with_pool_size(mut self, max_idle_per_host: usize) -> Self {
        self.max_idle_per_host = max_idle_per_host;
        self
    }

    /// Accept invalid TLS certificates (self-hosted servers with self-signed certs)
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[validate(custom(
        function = "crate::validation::validate_log_level",
        message = "Log level must be one of: trace, debug, info, warn, error"
    ))]
    pub level: String,

    /// Emit JSON lines instead of human readable output
    pub json_format: bool,

    /// Optional log file path
    #[validate(custom(
        function = "crate::validation::validate_file_path",
        message = "Log file path contains invalid characters"
    ))]
    pub file_path: Option<String>,

    /// Whether to log span open/close events
    pub include_spans: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_path: None,
            include_spans: false,
        }
    }
}

impl From<&LoggingSettings> for LoggingConfig {
    fn from(settings: &LoggingSettings) -> Self {
        Self {
            level: settings.level.clone(),
            json_format: settings.json_format,
            pretty_format: !settings.json_format && settings.file_path.is_none(),
            file_path: settings.file_path.as_ref().map(PathBuf::from),
            include_spans: settings.include_spans,
            ..LoggingConfig::default()
        }
    }
}
