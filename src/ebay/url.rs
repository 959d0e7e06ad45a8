//! Search URL construction.

use crate::ebay::conditions::Condition;
use crate::ebay::countries::Country;

/// Path and fixed query parameters of the eBay search page.
pub const SEARCH_PATH: &str = "/sch/i.html?_from=R40&_nkw=";

/// Builds the search URL for a query on the given country site.
pub fn search_url(query: &str, country: Country, condition: Condition) -> String {
    search_url_with_base(&country.base_url(), query, condition)
}

/// Builds a search URL against an arbitrary base (scheme and host, no trailing slash).
pub fn search_url_with_base(base: &str, query: &str, condition: Condition) -> String {
    format!("{}{}{}{}", base, SEARCH_PATH, encode_query(query), condition.filter())
}

/// Percent-encodes the query, keeping `/` and joining words with `+`.
pub fn encode_query(query: &str) -> String {
    urlencoding::encode(query).replace("%2F", "/").replace("%20", "+")
}
