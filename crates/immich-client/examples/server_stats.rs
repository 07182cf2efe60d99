//! Fetch and print server statistics and storage usage.
//!
//! Configuration comes from `IMMICH_CONFIG_PATH`, `config.yaml`/`config.yml`
//! or the `IMMICH_*` environment variables:
//!
//! ```sh
//! IMMICH_URL=http://localhost:2283/api IMMICH_API_KEY=... \
//!     cargo run -p immich-client --example server_stats
//! ```

use anyhow::Context;
use immich_client::{ImmichClient, StatsClient};
use immich_common::{init_logging, LoggingConfig};
use immich_config::ConfigLoader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load().context("loading configuration")?;
    init_logging(LoggingConfig::from(&config.logging)).context("initializing logging")?;

    let client = ImmichClient::from_config(&config.immich)?;
    if !client.test_connection().await {
        anyhow::bail!("Immich server at {} is not reachable", client.base_url());
    }

    let stats = client.fetch_server_statistics().await?;
    let storage = client.fetch_storage().await?;

    println!(
        "{} photos, {} videos ({} bytes)",
        stats.photos, stats.videos, stats.usage
    );
    for user in &stats.usage_by_user {
        let quota = user
            .quota_usage_percentage()
            .map_or_else(|| "no quota".to_string(), |p| format!("{p:.1}% of quota"));
        println!(
            "  {:<20} {:>8} photos {:>6} videos {:>14} bytes  {}",
            user.username, user.photos, user.videos, user.usage, quota
        );
    }
    println!(
        "disk: {} used of {} ({:.1}%), {} available",
        storage.disk_use, storage.disk_size, storage.disk_usage_percentage, storage.disk_available
    );

    Ok(())
}
