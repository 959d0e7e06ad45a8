//! ebay-pricer - average eBay listing price and shipping for a search query.
//!
//! Fetches one search result page, reads the listing price and shipping
//! texts, and reports their averages and total.

pub mod commands;
pub mod config;
pub mod ebay;
pub mod error;
pub mod format;
pub mod prompt;
pub mod summary;

pub use config::Config;
pub use ebay::{Condition, Country, SearchQuery};
pub use error::Error;
pub use summary::PriceSummary;
