//! eBay country sites and their domain suffixes.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported eBay country sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Au,
    At,
    Be,
    Ca,
    Ch,
    De,
    Es,
    Fr,
    Hk,
    Ie,
    It,
    My,
    Nl,
    Nz,
    Ph,
    Pl,
    Sg,
    Uk,
    #[default]
    Us,
}

impl Country {
    /// Returns the domain suffix appended to `ebay`.
    pub fn suffix(&self) -> &'static str {
        match self {
            Country::Au => ".com.au",
            Country::At => ".at",
            Country::Be => ".be",
            Country::Ca => ".ca",
            Country::Ch => ".ch",
            Country::De => ".de",
            Country::Es => ".es",
            Country::Fr => ".fr",
            Country::Hk => ".com.hk",
            Country::Ie => ".ie",
            Country::It => ".it",
            Country::My => ".com.my",
            Country::Nl => ".nl",
            Country::Nz => ".co.nz",
            Country::Ph => ".ph",
            Country::Pl => ".pl",
            Country::Sg => ".com.sg",
            Country::Uk => ".co.uk",
            Country::Us => ".com",
        }
    }

    /// Returns the eBay domain for this country.
    pub fn domain(&self) -> String {
        format!("ebay{}", self.suffix())
    }

    /// Returns the base URL for this country.
    pub fn base_url(&self) -> String {
        format!("https://www.{}", self.domain())
    }

    /// Returns the Accept-Language header value for this country.
    pub fn accept_language(&self) -> &'static str {
        match self {
            Country::Us | Country::Ph => "en-US,en;q=0.9",
            Country::Uk | Country::Ie => "en-GB,en;q=0.9",
            Country::Au => "en-AU,en;q=0.9",
            Country::Ca => "en-CA,en;q=0.9,fr-CA;q=0.8",
            Country::Nz => "en-NZ,en;q=0.9",
            Country::Sg | Country::My => "en-SG,en;q=0.9",
            Country::Hk => "zh-HK,zh;q=0.9,en;q=0.8",
            Country::At => "de-AT,de;q=0.9,en;q=0.8",
            Country::Ch => "de-CH,de;q=0.9,fr-CH;q=0.8,en;q=0.7",
            Country::De => "de-DE,de;q=0.9,en;q=0.8",
            Country::Be => "nl-BE,nl;q=0.9,fr-BE;q=0.8,en;q=0.7",
            Country::Nl => "nl-NL,nl;q=0.9,en;q=0.8",
            Country::Es => "es-ES,es;q=0.9,en;q=0.8",
            Country::Fr => "fr-FR,fr;q=0.9,en;q=0.8",
            Country::It => "it-IT,it;q=0.9,en;q=0.8",
            Country::Pl => "pl-PL,pl;q=0.9,en;q=0.8",
        }
    }

    /// Returns all supported countries.
    pub fn all() -> &'static [Country] {
        &[
            Country::Au,
            Country::At,
            Country::Be,
            Country::Ca,
            Country::Ch,
            Country::De,
            Country::Es,
            Country::Fr,
            Country::Hk,
            Country::Ie,
            Country::It,
            Country::My,
            Country::Nl,
            Country::Nz,
            Country::Ph,
            Country::Pl,
            Country::Sg,
            Country::Uk,
            Country::Us,
        ]
    }

    /// Returns the two-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Country::Au => "au",
            Country::At => "at",
            Country::Be => "be",
            Country::Ca => "ca",
            Country::Ch => "ch",
            Country::De => "de",
            Country::Es => "es",
            Country::Fr => "fr",
            Country::Hk => "hk",
            Country::Ie => "ie",
            Country::It => "it",
            Country::My => "my",
            Country::Nl => "nl",
            Country::Nz => "nz",
            Country::Ph => "ph",
            Country::Pl => "pl",
            Country::Sg => "sg",
            Country::Uk => "uk",
            Country::Us => "us",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Country::all()
            .iter()
            .copied()
            .find(|c| c.code() == code)
            .ok_or_else(|| Error::UnsupportedCountry(s.to_string()))
    }
}
