use crate::types::{Registry, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Fetches and parses a registry document. The feed generator consumes this
/// as a seam so hosts can supply their own transport.
#[async_trait]
pub trait RegistryReader: Send + Sync {
    /// Must fail on non-success HTTP status or invalid JSON.
    async fn read(&self, url: &str) -> Result<Registry>;
}

/// Default reqwest-backed registry reader.
pub struct HttpRegistryReader {
    client: Client,
}

impl HttpRegistryReader {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(concat!("registry-rss/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for HttpRegistryReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistryReader for HttpRegistryReader {
    async fn read(&self, url: &str) -> Result<Registry> {
        debug!("Fetching registry: {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        let registry: Registry = serde_json::from_str(&body)?;

        info!(
            "Fetched registry from {} ({} items)",
            url,
            registry.items.len()
        );
        Ok(registry)
    }
}
