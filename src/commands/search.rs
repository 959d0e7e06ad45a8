//! Search command implementation.

use crate::config::Config;
use crate::ebay::{Condition, EbayClient, Parser, SearchPage, SearchQuery};
use crate::format::Formatter;
use crate::summary::PriceSummary;
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

/// Averages listing prices for one query.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Validates the input, builds the query for the configured country.
    pub fn query(&self, item: &str, condition: Condition) -> Result<SearchQuery> {
        Ok(SearchQuery::new(item, condition, self.config.country)?)
    }

    /// Executes the search and returns formatted output.
    pub async fn execute(&self, item: &str, condition: Condition) -> Result<String> {
        let query = self.query(item, condition)?;
        let client = EbayClient::new(&self.config).await.context("Failed to create HTTP client")?;

        self.execute_with_client(&client, &query).await
    }

    /// Executes the search with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl SearchPage,
        query: &SearchQuery,
    ) -> Result<String> {
        let summary = self.summarize(client, query).await?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_summary(query, &summary))
    }

    /// Fetches one results page and averages its listings.
    pub async fn summarize(
        &self,
        client: &impl SearchPage,
        query: &SearchQuery,
    ) -> Result<PriceSummary> {
        debug!("Search URL: {}", query.url());

        let html = client.search(query).await?;
        let listings = Parser::parse(&html);

        if listings.is_empty() {
            warn!("No listings found for '{}'", query.item);
        }

        info!(
            "Averaging {} of {} prices and {} of {} shipping costs",
            listings.valid_prices(),
            listings.prices.len(),
            listings.valid_shipping(),
            listings.shipping.len()
        );

        Ok(PriceSummary::from_listings(&listings))
    }
}
