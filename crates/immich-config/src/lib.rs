//! Configuration management for the Immich stats client

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{Config, ImmichConfig, LoggingSettings};
