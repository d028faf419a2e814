//! # Currency Rate Table
//!
//! Units of each currency per one unit of the base currency. Rates are
//! static configuration, not market data, and are immutable once built.
//!
//! Construction validates that every enumerated currency has a finite
//! positive rate and that the base currency's own rate is exactly 1.
//! Lookups by free-form code can still miss (unknown codes), and callers
//! treat that as a soft failure.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::core::currency::Currency;

#[derive(Debug, Clone, PartialEq)]
pub enum RateTableError {
    /// An enumerated currency has no rate.
    Missing(Currency),
    /// A rate is zero, negative, or not finite.
    NonPositive { currency: Currency, rate: f64 },
    /// The base currency's rate is not exactly 1.
    BaseNotUnit(f64),
    /// An override names a code outside the enumerated set.
    UnknownCode(String),
}

impl fmt::Display for RateTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateTableError::Missing(c) => write!(f, "no exchange rate for {c}"),
            RateTableError::NonPositive { currency, rate } => {
                write!(f, "exchange rate for {currency} must be positive, got {rate}")
            }
            RateTableError::BaseNotUnit(rate) => {
                write!(f, "base currency {} must have rate 1, got {rate}", Currency::BASE)
            }
            RateTableError::UnknownCode(code) => write!(f, "unknown currency code: {code}"),
        }
    }
}

impl std::error::Error for RateTableError {}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyRateTable {
    rates: HashMap<Currency, f64>,
}

const BUILTIN_RATES: [(Currency, f64); 20] = [
    (Currency::Usd, 1.0),
    (Currency::Sar, 3.75),
    (Currency::Syp, 2500.0),
    (Currency::Jod, 0.71),
    (Currency::Egp, 50.2),
    (Currency::Aed, 3.67),
    (Currency::Qar, 3.64),
    (Currency::Bhd, 0.38),
    (Currency::Kwd, 0.31),
    (Currency::Omr, 0.38),
    (Currency::Lyd, 4.8),
    (Currency::Dzd, 135.0),
    (Currency::Mad, 10.0),
    (Currency::Tnd, 3.1),
    (Currency::Sdg, 600.0),
    (Currency::Iqd, 1300.0),
    (Currency::Lbp, 15000.0),
    (Currency::Mru, 40.0),
    (Currency::Yer, 250.0),
    (Currency::Sos, 570.0),
];

impl CurrencyRateTable {
    /// Builds a table from a complete set of rates.
    pub fn new(rates: HashMap<Currency, f64>) -> Result<Self, RateTableError> {
        for currency in Currency::ALL {
            let rate = *rates.get(&currency).ok_or(RateTableError::Missing(currency))?;
            if !rate.is_finite() || rate <= 0.0 {
                return Err(RateTableError::NonPositive { currency, rate });
            }
            if currency.is_base() && rate != 1.0 {
                return Err(RateTableError::BaseNotUnit(rate));
            }
        }
        Ok(Self { rates })
    }

    /// The shipped default rates.
    pub fn builtin() -> Self {
        Self {
            rates: BUILTIN_RATES.into_iter().collect(),
        }
    }

    /// The defaults with selected rates replaced, keyed by currency code
    /// as they appear in a config file.
    pub fn with_overrides(overrides: &BTreeMap<String, f64>) -> Result<Self, RateTableError> {
        let mut rates: HashMap<Currency, f64> = BUILTIN_RATES.into_iter().collect();
        for (code, rate) in overrides {
            let currency = code
                .parse::<Currency>()
                .map_err(|_| RateTableError::UnknownCode(code.clone()))?;
            rates.insert(currency, *rate);
        }
        Self::new(rates)
    }

    pub fn rate(&self, currency: Currency) -> Option<f64> {
        self.rates.get(&currency).copied()
    }

    /// Rate for a free-form code; `None` for anything outside the table.
    pub fn rate_for_code(&self, code: &str) -> Option<f64> {
        code.parse::<Currency>().ok().and_then(|c| self.rate(c))
    }

    /// All rates in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        Currency::ALL
            .into_iter()
            .filter_map(move |c| self.rate(c).map(|rate| (c, rate)))
    }
}

impl Default for CurrencyRateTable {
    fn default() -> Self {
        Self::builtin()
    }
}
