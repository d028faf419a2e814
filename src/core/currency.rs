//! # Currencies
//!
//! The closed set of currencies the storefront can price in.
//!
//! `Usd` is the base currency: every rate is expressed as units of a
//! currency per one US dollar. `Syp` is the high-inflation currency and is
//! displayed in whole units only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Sar,
    Syp,
    Jod,
    Egp,
    Aed,
    Qar,
    Bhd,
    Kwd,
    Omr,
    Lyd,
    Dzd,
    Mad,
    Tnd,
    Sdg,
    Iqd,
    Lbp,
    Mru,
    Yer,
    Sos,
}

impl Currency {
    pub const BASE: Currency = Currency::Usd;

    /// Fractional amounts are meaningless at this currency's scale.
    pub const HIGH_INFLATION: Currency = Currency::Syp;

    pub const ALL: [Currency; 20] = [
        Currency::Usd,
        Currency::Sar,
        Currency::Syp,
        Currency::Jod,
        Currency::Egp,
        Currency::Aed,
        Currency::Qar,
        Currency::Bhd,
        Currency::Kwd,
        Currency::Omr,
        Currency::Lyd,
        Currency::Dzd,
        Currency::Mad,
        Currency::Tnd,
        Currency::Sdg,
        Currency::Iqd,
        Currency::Lbp,
        Currency::Mru,
        Currency::Yer,
        Currency::Sos,
    ];

    /// ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Sar => "SAR",
            Currency::Syp => "SYP",
            Currency::Jod => "JOD",
            Currency::Egp => "EGP",
            Currency::Aed => "AED",
            Currency::Qar => "QAR",
            Currency::Bhd => "BHD",
            Currency::Kwd => "KWD",
            Currency::Omr => "OMR",
            Currency::Lyd => "LYD",
            Currency::Dzd => "DZD",
            Currency::Mad => "MAD",
            Currency::Tnd => "TND",
            Currency::Sdg => "SDG",
            Currency::Iqd => "IQD",
            Currency::Lbp => "LBP",
            Currency::Mru => "MRU",
            Currency::Yer => "YER",
            Currency::Sos => "SOS",
        }
    }

    /// Display prefix used by the price formatter. Only the dollar has a
    /// glyph; everything else is prefixed with its code.
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            other => other.code(),
        }
    }

    pub fn is_base(self) -> bool {
        self == Currency::BASE
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a string is not one of the enumerated currency codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCurrencyError(pub String);

impl fmt::Display for ParseCurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported currency: {}", self.0)
    }
}

impl std::error::Error for ParseCurrencyError {}

impl FromStr for Currency {
    type Err = ParseCurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCurrencyError(s.to_string()))
    }
}
