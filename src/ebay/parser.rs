//! HTML parser for eBay search result pages.

use crate::ebay::models::{Listings, RawListings};
use crate::ebay::selectors;
use regex_lite::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::{debug, trace};

/// First run of digits, optionally followed by a decimal part.
static AMOUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+(\.\d+)?").unwrap());

/// Parser for eBay search result pages.
pub struct Parser;

impl Parser {
    /// Parses a search result page into listing amounts.
    pub fn parse(html: &str) -> Listings {
        let document = Html::parse_document(html);
        let raw = extract_raw(&document);
        parse_listings(&raw)
    }
}

/// Collects the trimmed price and shipping texts of a document.
pub fn extract_raw(document: &Html) -> RawListings {
    let raw = RawListings {
        prices: select_text(document, &selectors::PRICE),
        shipping: select_text(document, &selectors::SHIPPING),
    };

    debug!("Found {} price and {} shipping elements", raw.prices.len(), raw.shipping.len());
    raw
}

/// Each text node is trimmed and the pieces are joined without a separator.
fn select_text(document: &Html, selector: &Selector) -> Vec<String> {
    document
        .select(selector)
        .map(|e| e.text().map(str::trim).filter(|t| !t.is_empty()).collect::<String>())
        .collect()
}

/// Converts raw texts to amounts.
///
/// Empty price texts are dropped. Empty shipping texts count as free
/// shipping (`0.0`). Text without any digits becomes `None`.
pub fn parse_listings(raw: &RawListings) -> Listings {
    let prices = raw.prices.iter().filter(|t| !t.is_empty()).map(|t| parse_amount(t)).collect();

    let shipping = raw
        .shipping
        .iter()
        .map(|t| if t.is_empty() { Some(0.0) } else { parse_amount(t) })
        .collect();

    Listings { prices, shipping }
}

/// Parses the first number in a price text.
///
/// Commas are read as decimal points, so `8,99` is `8.99` and `1,234.56`
/// reads as `1.234`. Only ASCII digits count.
pub fn parse_amount(text: &str) -> Option<f64> {
    let normalized = text.replace(',', ".");
    let value = AMOUNT.find(&normalized).and_then(|m| m.as_str().parse().ok());
    trace!("Parsed {:?} as {:?}", text, value);
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(prices: &[&str], shipping: &[&str]) -> RawListings {
        RawListings {
            prices: prices.iter().map(|s| s.to_string()).collect(),
            shipping: shipping.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$12.50"), Some(12.5));
        assert_eq!(parse_amount("$8,99"), Some(8.99));
        assert_eq!(parse_amount("EUR 45,00"), Some(45.0));
        assert_eq!(parse_amount("+$5.00 shipping"), Some(5.0));
        assert_eq!(parse_amount("$10.00 to $20.00"), Some(10.0));
        assert_eq!(parse_amount("£7"), Some(7.0));
    }

    #[test]
    fn test_parse_amount_thousands_separator() {
        // Comma becomes a decimal point; the first number wins
        assert_eq!(parse_amount("$1,234.56"), Some(1.234));
        assert_eq!(parse_amount("1234,56"), Some(1234.56));
    }

    #[test]
    fn test_parse_amount_no_digits() {
        assert_eq!(parse_amount("Free"), None);
        assert_eq!(parse_amount("Free shipping"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("$."), None);
    }

    #[test]
    fn test_parse_listings_prices() {
        let listings = parse_listings(&raw(&["$12.50", "$8,99", ""], &[]));
        assert_eq!(listings.prices, vec![Some(12.5), Some(8.99)]);
    }

    #[test]
    fn test_parse_listings_price_without_digits_is_absent() {
        let listings = parse_listings(&raw(&["Sold out", "$3.00"], &[]));
        assert_eq!(listings.prices, vec![None, Some(3.0)]);
    }

    #[test]
    fn test_parse_listings_shipping() {
        let listings = parse_listings(&raw(&[], &["", "Free", "$5.00"]));
        assert_eq!(listings.shipping, vec![Some(0.0), None, Some(5.0)]);
    }

    #[test]
    fn test_extract_raw_trims_text() {
        let document = Html::parse_document(
            r#"<ul>
                <li><span class="s-item__price">
                    $12.50
                </span>
                <span class="s-item__shipping s-item__logisticsCost">  +$3.99 shipping </span></li>
                <li><span class="s-item__price"><span>$</span><span>8,99</span></span>
                <span class="s-item__shipping s-item__logisticsCost"></span></li>
            </ul>"#,
        );

        let raw = extract_raw(&document);
        assert_eq!(raw.prices, vec!["$12.50", "$8,99"]);
        assert_eq!(raw.shipping, vec!["+$3.99 shipping", ""]);
    }

    #[test]
    fn test_extract_raw_joins_nested_spans() {
        let document = Html::parse_document(
            "<div><span class=\"s-item__price\"><span>1</span>\n<span>299,00</span></span>\n\
             <span class=\"s-item__shipping s-item__logisticsCost\">\n  <span>+EUR</span>\n  \
             <span> 4,50 </span>\n</span></div>",
        );

        let raw = extract_raw(&document);
        assert_eq!(raw.prices, vec!["1299,00"]);
        assert_eq!(raw.shipping, vec!["+EUR4,50"]);

        let listings = parse_listings(&raw);
        assert_eq!(listings.prices, vec![Some(1299.0)]);
        assert_eq!(listings.shipping, vec![Some(4.5)]);
    }

    #[test]
    fn test_parse_no_listings() {
        let listings = Parser::parse("<html><body><p>No exact matches found</p></body></html>");
        assert!(listings.is_empty());
    }

    #[test]
    fn test_parse_document() {
        let listings = Parser::parse(
            r#"<html><body>
                <div class="s-item__price">$10.00</div>
                <div class="s-item__shipping s-item__logisticsCost">Free shipping</div>
                <div class="s-item__price">$20.00</div>
                <div class="s-item__shipping s-item__logisticsCost">+$2.50 shipping</div>
            </body></html>"#,
        );

        assert_eq!(listings.prices, vec![Some(10.0), Some(20.0)]);
        assert_eq!(listings.shipping, vec![None, Some(2.5)]);
    }
}
