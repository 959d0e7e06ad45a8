//! Input validation errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(
        "Condition '{0}' not supported, please use one of the following: all, new, opened, refurbished, used"
    )]
    InvalidCondition(String),

    #[error(
        "Country '{0}' not supported, please use one of the following: au, at, be, ca, ch, de, es, fr, hk, ie, it, my, nl, nz, ph, pl, sg, uk, us"
    )]
    UnsupportedCountry(String),

    #[error("Item name must not be empty")]
    EmptyQuery,
}
