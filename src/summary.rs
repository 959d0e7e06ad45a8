//! Price averaging over parsed listings.

use crate::ebay::models::Listings;
use serde::{Deserialize, Serialize};

/// Average price, average shipping and their total, rounded to cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub price: f64,
    pub shipping: f64,
    pub total: f64,
}

impl PriceSummary {
    /// Averages listing prices and shipping costs.
    pub fn from_listings(listings: &Listings) -> Self {
        let price = round2(average(&listings.prices));
        let shipping = round2(average(&listings.shipping));

        Self { price, shipping, total: round2(price + shipping) }
    }
}

/// Mean of the present values, or 0 when there are none.
pub fn average(values: &[Option<f64>]) -> f64 {
    let (sum, count) = values.iter().flatten().fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Rounds to two decimal places.
///
/// Goes through the exact decimal expansion of the float, so
/// `10.745000000000001` rounds up while `2.675` (stored below the tie) rounds down.
/// Exact ties such as `0.125` go to the even cent.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_skips_absent() {
        assert_eq!(average(&[Some(0.0), None, Some(5.0)]), 2.5);
        assert_eq!(average(&[None, Some(4.0)]), 4.0);
    }

    #[test]
    fn test_average_empty() {
        assert_eq!(average(&[]), 0.0);
        assert_eq!(average(&[None, None]), 0.0);
    }

    #[test]
    fn test_average_single() {
        assert_eq!(round2(average(&[Some(7.129)])), 7.13);
        assert_eq!(round2(average(&[Some(19.99)])), 19.99);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(10.745000000000001), 10.75);
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(1.005), 1.0);
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(15.0), 15.0);
    }

    #[test]
    fn test_round2_exact_ties_go_to_even() {
        // Exactly representable halves round to the even cent
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(0.625), 0.62);
        assert_eq!(round2(0.875), 0.88);
        assert_eq!(round2(1.125), 1.12);
    }

    #[test]
    fn test_summary_tie_average() {
        let listings = Listings { prices: vec![Some(1.0), Some(1.25)], shipping: vec![] };
        let summary = PriceSummary::from_listings(&listings);
        assert_eq!(summary.price, 1.12);
        assert_eq!(summary.total, 1.12);
    }

    #[test]
    fn test_summary_prices_with_comma_decimal() {
        let listings = Listings { prices: vec![Some(12.5), Some(8.99)], shipping: vec![] };
        let summary = PriceSummary::from_listings(&listings);
        assert_eq!(summary.price, 10.75);
        assert_eq!(summary.shipping, 0.0);
        assert_eq!(summary.total, 10.75);
    }

    #[test]
    fn test_summary_empty() {
        let summary = PriceSummary::from_listings(&Listings::default());
        assert_eq!(summary, PriceSummary { price: 0.0, shipping: 0.0, total: 0.0 });
    }

    #[test]
    fn test_summary_total_from_rounded_parts() {
        let listings = Listings {
            prices: vec![Some(10.004), Some(10.004)],
            shipping: vec![Some(1.004)],
        };
        let summary = PriceSummary::from_listings(&listings);
        assert_eq!(summary.price, 10.0);
        assert_eq!(summary.shipping, 1.0);
        assert_eq!(summary.total, 11.0);
    }

    #[test]
    fn test_summary_widget_scenario() {
        let listings = Listings {
            prices: vec![Some(10.0), Some(20.0)],
            shipping: vec![Some(0.0), Some(0.0)],
        };
        let summary = PriceSummary::from_listings(&listings);
        assert_eq!(summary, PriceSummary { price: 15.0, shipping: 0.0, total: 15.0 });
    }

    #[test]
    fn test_summary_serde() {
        let summary = PriceSummary { price: 15.0, shipping: 2.5, total: 17.5 };
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(json, r#"{"price":15.0,"shipping":2.5,"total":17.5}"#);
    }
}
