//! Data models for eBay search queries and scraped listings.

use crate::ebay::conditions::Condition;
use crate::ebay::countries::Country;
use crate::error::Error;
use serde::{Deserialize, Serialize};

/// A validated search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Item name as typed by the user
    pub item: String,
    /// Listing condition filter
    pub condition: Condition,
    /// Country site to search
    pub country: Country,
}

impl SearchQuery {
    /// Creates a query, rejecting blank item names.
    pub fn new(
        item: impl Into<String>,
        condition: Condition,
        country: Country,
    ) -> Result<Self, Error> {
        let item = item.into();
        if item.trim().is_empty() {
            return Err(Error::EmptyQuery);
        }
        Ok(Self { item, condition, country })
    }

    /// Returns the search URL for this query.
    pub fn url(&self) -> String {
        crate::ebay::url::search_url(&self.item, self.country, self.condition)
    }
}

/// Trimmed text of the price and shipping elements, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawListings {
    pub prices: Vec<String>,
    pub shipping: Vec<String>,
}

/// Parsed listing amounts. `None` marks text with no number in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listings {
    pub prices: Vec<Option<f64>>,
    pub shipping: Vec<Option<f64>>,
}

impl Listings {
    /// Number of prices that parsed to a value.
    pub fn valid_prices(&self) -> usize {
        self.prices.iter().flatten().count()
    }

    /// Number of shipping costs that parsed to a value.
    pub fn valid_shipping(&self) -> usize {
        self.shipping.iter().flatten().count()
    }

    /// True when the page had no price or shipping elements at all.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty() && self.shipping.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_new() {
        let query = SearchQuery::new("widget", Condition::New, Country::Us).unwrap();
        assert_eq!(query.item, "widget");
        assert_eq!(query.condition, Condition::New);
        assert_eq!(query.country, Country::Us);
    }

    #[test]
    fn test_search_query_rejects_blank() {
        assert_eq!(SearchQuery::new("", Condition::All, Country::Us), Err(Error::EmptyQuery));
        assert_eq!(SearchQuery::new("   ", Condition::All, Country::Us), Err(Error::EmptyQuery));
    }

    #[test]
    fn test_search_query_url() {
        let query = SearchQuery::new("widget", Condition::New, Country::Uk).unwrap();
        assert_eq!(
            query.url(),
            "https://www.ebay.co.uk/sch/i.html?_from=R40&_nkw=widget&LH_ItemCondition=1000"
        );
    }

    #[test]
    fn test_listings_counts() {
        let listings = Listings {
            prices: vec![Some(1.0), None, Some(3.0)],
            shipping: vec![Some(0.0), None],
        };
        assert_eq!(listings.valid_prices(), 2);
        assert_eq!(listings.valid_shipping(), 1);
        assert!(!listings.is_empty());
        assert!(Listings::default().is_empty());
    }
}
