//! CSS selectors for eBay search result pages.
//!
//! Update this file when eBay changes the listing markup, and add the new
//! shape to the parser fixture.
//!
//! Class selectors match elements carrying the listed classes in any order,
//! alongside any other classes.

use scraper::Selector;
use std::sync::LazyLock;

/// Listing price, e.g. `$12.50` or `$10.00 to $20.00`.
pub static PRICE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".s-item__price").unwrap());

/// Listing shipping cost, e.g. `+$5.00 shipping` or `Free shipping`.
pub static SHIPPING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".s-item__shipping.s-item__logisticsCost").unwrap());
