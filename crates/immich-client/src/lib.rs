//! # Immich Client
//!
//! Async client for the Immich `/server/statistics` and `/server/storage`
//! endpoints.
//!
//! ```no_run
//! use immich_client::ImmichClient;
//!
//! # async fn run() -> immich_common::Result<()> {
//! let client = ImmichClient::new("http://localhost:2283/api", "api-key", reqwest::Client::new());
//! let stats = client.fetch_server_statistics().await?;
//! println!("{} photos, {} videos", stats.photos, stats.videos);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod models;

pub use client::{ImmichClient, StatsClient, SERVER_STATISTICS_PATH, SERVER_STORAGE_PATH};
pub use immich_common::{ImmichError, Result};
pub use models::{ServerStatistics, Storage, UsageByUser};
