//! # Immich Common
//!
//! Error taxonomy and logging bootstrap shared by the Immich stats crates.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{ImmichError, Result};
pub use logging::{init_default_logging, init_dev_logging, init_logging, LoggingConfig};
