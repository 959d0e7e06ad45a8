//! Listing condition filters for eBay search.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Item condition to filter search results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    #[default]
    All,
    New,
    Opened,
    Refurbished,
    Used,
}

impl Condition {
    /// Returns the query-string fragment appended to the search URL.
    pub fn filter(&self) -> &'static str {
        match self {
            Condition::All => "",
            Condition::New => "&LH_ItemCondition=1000",
            Condition::Opened => "&LH_ItemCondition=1500",
            Condition::Refurbished => "&LH_ItemCondition=2500",
            Condition::Used => "&LH_ItemCondition=3000",
        }
    }

    pub fn all() -> &'static [Condition] {
        &[
            Condition::All,
            Condition::New,
            Condition::Opened,
            Condition::Refurbished,
            Condition::Used,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Condition::All => "all",
            Condition::New => "new",
            Condition::Opened => "opened",
            Condition::Refurbished => "refurbished",
            Condition::Used => "used",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Condition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Condition::All),
            "new" => Ok(Condition::New),
            "opened" => Ok(Condition::Opened),
            "refurbished" => Ok(Condition::Refurbished),
            "used" => Ok(Condition::Used),
            _ => Err(Error::InvalidCondition(s.to_string())),
        }
    }
}
