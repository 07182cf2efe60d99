//! Configuration loading utilities

use crate::Config;
use immich_common::{ImmichError, Result as ImmichResult};
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for ImmichError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ValidationError(errors) => {
                let message = format!("Invalid configuration: {errors}");
                // lowest field name keeps the report stable across runs
                match errors.field_errors().into_keys().min() {
                    Some(field) => ImmichError::validation_field(message, field),
                    None => ImmichError::validation(message),
                }
            }
            other => ImmichError::config_with_source("Failed to load configuration", other),
        }
    }
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        debug!("Loading configuration from {}", path.as_ref().display());
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate_all()?;

        Ok(config)
    }

    /// Parse and validate configuration from a YAML string, without env overrides
    pub fn from_yaml_str(content: &str) -> Result<Config, ConfigError> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration from `IMMICH_CONFIG_PATH`, `config.yaml` or `config.yml`,
    /// falling back to defaults with environment overrides
    pub fn load() -> ImmichResult<Config> {
        let config = if let Ok(config_path) = env::var("IMMICH_CONFIG_PATH") {
            Self::load_config(&config_path)?
        } else if Path::new("config.yaml").exists() {
            Self::load_config("config.yaml")?
        } else if Path::new("config.yml").exists() {
            Self::load_config("config.yml")?
        } else {
            debug!("No configuration file found, using defaults");
            let mut config = Config::default();
            Self::apply_env_overrides(&mut config)?;
            config.validate_all().map_err(ConfigError::from)?;
            config
        };

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ImmichResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        if let Ok(url) = env::var("IMMICH_URL") {
            config.immich.url = url;
        }

        if let Ok(api_key) = env::var("IMMICH_API_KEY") {
            config.immich.api_key = api_key;
        }

        if let Ok(timeout) = env::var("IMMICH_TIMEOUT") {
            config.immich.timeout_seconds =
                timeout.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "IMMICH_TIMEOUT".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Ok(accept) = env::var("IMMICH_ACCEPT_INVALID_CERTS") {
            config.immich.accept_invalid_certs =
                accept.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "IMMICH_ACCEPT_INVALID_CERTS".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Ok(level) = env::var("IMMICH_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml_str() {
        let yaml = r#"
immich:
  url: "https://photos.example.com/api"
  api_key: "abc123"
  timeout_seconds: 15
logging:
  level: debug
"#;
        let config = ConfigLoader::from_yaml_str(yaml).unwrap();
        assert_eq!(config.immich.url, "https://photos.example.com/api");
        assert_eq!(config.immich.api_key, "abc123");
        assert_eq!(config.immich.timeout_seconds, 15);
        // omitted fields fall back to defaults
        assert_eq!(config.immich.max_idle_per_host, 10);
        assert!(!config.immich.accept_invalid_certs);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_from_yaml_str_rejects_invalid_config() {
        let yaml = r#"
immich:
  url: "https://photos.example.com/api"
  api_key: ""
"#;
        let err = ConfigLoader::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn test_from_yaml_str_rejects_malformed_yaml() {
        let err = ConfigLoader::from_yaml_str("immich: [unterminated").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validation_failure_converts_to_validation_error() {
        let yaml = r#"
immich:
  url: "https://photos.example.com/api"
  api_key: ""
"#;
        let err: ImmichError = ConfigLoader::from_yaml_str(yaml).unwrap_err().into();
        match err {
            ImmichError::Validation { message, field } => {
                assert_eq!(field.as_deref(), Some("api_key"));
                assert!(message.contains("Invalid configuration"));
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_converts_to_config_error() {
        let err = ConfigLoader::load_from_file("/nonexistent/immich/config.yaml").unwrap_err();
        assert!(matches!(err, ImmichError::Config { .. }));
        assert!(err.to_string().contains("Failed to load configuration"));
    }
}
