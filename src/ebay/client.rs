//! HTTP client for eBay requests using wreq for TLS fingerprint emulation.

use crate::config::Config;
use crate::ebay::countries::Country;
use crate::ebay::models::SearchQuery;
use crate::ebay::url;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::Client;
use wreq_util::Emulation;

/// Trait for fetching search pages - enables mocking for tests.
#[async_trait]
pub trait SearchPage: Send + Sync {
    /// Fetches the search result page for a query and returns its HTML.
    async fn search(&self, query: &SearchQuery) -> Result<String>;

    /// Returns the configured country site.
    fn country(&self) -> Country;
}

/// eBay HTTP client with browser impersonation.
pub struct EbayClient {
    client: Client,
    country: Country,
    base_url: Option<String>,
}

impl EbayClient {
    /// Creates a new eBay client with the given configuration.
    pub async fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, None).await
    }

    /// Creates a new eBay client with an optional custom base URL (for testing).
    pub async fn with_base_url(config: &Config, base_url: Option<String>) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        Ok(Self { client, country: config.country, base_url })
    }

    /// Returns the search URL, against the custom base when one is set.
    fn url_for(&self, query: &SearchQuery) -> String {
        match &self.base_url {
            Some(base) => url::search_url_with_base(base, &query.item, query.condition),
            None => query.url(),
        }
    }

    /// Performs a single GET and returns the body.
    async fn get(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8")
            .header("Accept-Language", self.country.accept_language())
            .header("Accept-Encoding", "gzip, deflate, br")
            .header("Sec-Fetch-Dest", "document")
            .header("Sec-Fetch-Mode", "navigate")
            .header("Sec-Fetch-Site", "none")
            .header("Upgrade-Insecure-Requests", "1")
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            anyhow::bail!("Request failed with status: {}", status);
        }

        let final_url = response.uri().to_string();
        if self.base_url.is_none() && !final_url.contains(&self.country.domain()) {
            warn!("Redirected to different domain: {}", final_url);
        }

        response.text().await.context("Failed to read response body")
    }
}

#[async_trait]
impl SearchPage for EbayClient {
    async fn search(&self, query: &SearchQuery) -> Result<String> {
        let url = self.url_for(query);

        info!("Searching {} for: {} ({})", self.country.domain(), query.item, query.condition);
        self.get(&url).await
    }

    fn country(&self) -> Country {
        self.country
    }
}
