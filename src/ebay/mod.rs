//! eBay-specific modules for URL building, HTTP client, parsing, and data models.

pub mod client;
pub mod conditions;
pub mod countries;
pub mod models;
pub mod parser;
pub mod selectors;
pub mod url;

pub use client::{EbayClient, SearchPage};
pub use conditions::Condition;
pub use countries::Country;
pub use models::{Listings, RawListings, SearchQuery};
pub use parser::Parser;
