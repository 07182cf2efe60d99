//! Immich server statistics client
//!
//! Two authenticated GET endpoints, each a single linear request:
//! build, send, check for `200 OK`, read the body, decode JSON. Nothing is
//! retried or cached; every failure is returned to the caller with the stage
//! that produced it.

use crate::models::{ServerStatistics, Storage};
use async_trait::async_trait;
use immich_common::{ImmichError, Result};
use immich_config::ImmichConfig;
use reqwest::{
    header::{ACCEPT, AUTHORIZATION},
    Client, StatusCode,
};
use serde::de::DeserializeOwned;
use std::{fmt, time::Duration};
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Path of the server statistics endpoint, relative to the base URL
pub const SERVER_STATISTICS_PATH: &str = "/server/statistics";
/// Path of the storage endpoint, relative to the base URL
pub const SERVER_STORAGE_PATH: &str = "/server/storage";

/// Capability interface over the Immich statistics endpoints
///
/// Implemented by [`ImmichClient`]; consumers can take `&dyn StatsClient` to
/// swap in a mock.
#[async_trait]
pub trait StatsClient: Send + Sync {
    /// Fetch photo/video counts and usage, overall and per user
    async fn fetch_server_statistics(&self) -> Result<ServerStatistics>;

    /// Fetch disk usage of the server's storage volume
    async fn fetch_storage(&self) -> Result<Storage>;

    /// Health check: true when the storage endpoint answers with a valid body
    async fn test_connection(&self) -> bool {
        info!("Testing connection to Immich");
        match self.fetch_storage().await {
            Ok(_) => {
                info!("Connection test successful");
                true
            }
            Err(e) => {
                warn!("Connection test failed: {}", e);
                false
            }
        }
    }
}

/// Immich API client
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct ImmichClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for ImmichClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImmichClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl ImmichClient {
    /// Create a client over a caller-configured transport
    ///
    /// Timeouts and TLS settings are whatever `client` was built with.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Create a client whose transport is built from `config`
    pub fn from_config(config: &ImmichConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .pool_max_idle_per_host(config.max_idle_per_host)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| ImmichError::config_with_source("Failed to create HTTP client", e))?;

        if config.accept_invalid_certs {
            warn!("TLS certificate validation is disabled for {}", config.url);
        }

        Ok(Self::new(config.url.clone(), config.api_key.clone(), client))
    }

    /// Base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL and an endpoint path
    fn endpoint_url(&self, path: &str) -> Result<Url> {
        let raw = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|e| {
            ImmichError::request_with_source(format!("Failed to create Immich API request for '{raw}'"), e)
        })
    }

    /// Issue an authenticated GET and decode the JSON body
    #[instrument(skip(self))]
    async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(path)?;
        debug!("Making request to: {}", url);

        let request = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Token {}", self.api_key))
            .build()
            .map_err(|e| ImmichError::request_with_source("Failed to create Immich API request", e))?;

        let response = self.client.execute(request).await.map_err(|e| {
            error!("Request failed: {}", e);
            ImmichError::from(e)
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("Unexpected status code: {}", status);
            return Err(ImmichError::status(status.as_u16(), path));
        }

        let body = response.text().await.map_err(|e| {
            error!("Failed reading response body: {}", e);
            ImmichError::body_with_source("Failed to read response body", status.as_u16(), e)
        })?;
        debug!(bytes = body.len(), "Response body received");

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                error!("Failed to decode response body: {}", e);
                Err(ImmichError::decode(body, e))
            }
        }
    }

    /// Fetch server statistics from `GET {base_url}/server/statistics`
    #[instrument(skip(self))]
    pub async fn fetch_server_statistics(&self) -> Result<ServerStatistics> {
        info!("Fetching server statistics");
        let statistics: ServerStatistics = self.get_json(SERVER_STATISTICS_PATH).await?;

        info!(
            photos = statistics.photos,
            videos = statistics.videos,
            users = statistics.usage_by_user.len(),
            "Fetched server statistics"
        );
        Ok(statistics)
    }

    /// Fetch storage information from `GET {base_url}/server/storage`
    #[instrument(skip(self))]
    pub async fn fetch_storage(&self) -> Result<Storage> {
        info!("Fetching storage information");
        let storage: Storage = self.get_json(SERVER_STORAGE_PATH).await?;

        info!(
            disk_use = %storage.disk_use,
            disk_size = %storage.disk_size,
            "Fetched storage information"
        );
        Ok(storage)
    }
}

#[async_trait]
impl StatsClient for ImmichClient {
    async fn fetch_server_statistics(&self) -> Result<ServerStatistics> {
        ImmichClient::fetch_server_statistics(self).await
    }

    async fn fetch_storage(&self) -> Result<Storage> {
        ImmichClient::fetch_storage(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ImmichClient {
        ImmichClient::new(base_url, "test-key", Client::new())
    }

    #[test]
    fn test_url_building() {
        let url = client("http://example.com/api")
            .endpoint_url(SERVER_STATISTICS_PATH)
            .unwrap();
        assert_eq!(url.as_str(), "http://example.com/api/server/statistics");
    }

    #[test]
    fn test_url_building_trims_trailing_slash() {
        let url = client("http://example.com/api/")
            .endpoint_url(SERVER_STORAGE_PATH)
            .unwrap();
        assert_eq!(url.as_str(), "http://example.com/api/server/storage");
    }

    #[test]
    fn test_malformed_base_url_is_request_error() {
        let err = client("not a url")
            .endpoint_url(SERVER_STATISTICS_PATH)
            .unwrap_err();
        assert!(matches!(err, ImmichError::Request { .. }));
        assert!(err.to_string().contains("Failed to create Immich API request"));
    }

    #[tokio::test]
    async fn test_malformed_base_url_fails_before_sending() {
        let result = client("::nope::").fetch_server_statistics().await;
        assert!(matches!(result, Err(ImmichError::Request { .. })));
    }

    #[tokio::test]
    async fn test_invalid_api_key_header_is_request_error() {
        let client = ImmichClient::new("http://127.0.0.1:9", "bad\nkey", Client::new());
        let err = client.fetch_storage().await.unwrap_err();
        assert!(matches!(err, ImmichError::Request { .. }));
    }

    #[test]
    fn test_from_config() {
        let config = ImmichConfig::new("http://localhost:2283/api", "test-key")
            .with_timeout(5)
            .with_pool_size(2);
        let client = ImmichClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:2283/api");
        assert_eq!(client.api_key, "test-key");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let debug = format!("{:?}", client("http://example.com"));
        assert!(debug.contains("http://example.com"));
        assert!(!debug.contains("test-key"));
    }
}
