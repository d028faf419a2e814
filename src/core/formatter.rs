//! # Price Formatter
//!
//! Renders a base-currency amount as a display string in a target
//! currency: the currency symbol followed by the number, with no thousands
//! separators.
//!
//! This path multiplies by the target rate directly instead of going
//! through [`ConversionEngine`](crate::core::conversion::ConversionEngine),
//! and it rounds where the engine truncates. The high-inflation currency
//! is rounded to whole units; every other currency to two decimals, with
//! exact half-cent ties rounded away from zero.

use log::error;

use crate::core::currency::Currency;
use crate::core::rates::CurrencyRateTable;

pub struct PriceFormatter<'a> {
    rates: &'a CurrencyRateTable,
}

impl<'a> PriceFormatter<'a> {
    pub fn new(rates: &'a CurrencyRateTable) -> Self {
        Self { rates }
    }

    /// `amount` is taken to be in the base currency.
    pub fn format(&self, amount: f64, currency: Currency) -> String {
        let rate = self.rates.rate(currency).unwrap_or_else(|| {
            error!("Missing exchange rate for {}, formatting unconverted", currency);
            1.0
        });
        let converted = amount * rate;

        let number = if currency == Currency::HIGH_INFLATION {
            format!("{:.0}", converted.round())
        } else {
            two_decimals(converted)
        };
        format!("{}{}", currency.symbol(), number)
    }
}

/// `{:.2}` rounds exact ties to even. A double sits exactly on a
/// half-cent only when it is a multiple of 1/8, so those are detected and
/// rounded away from zero; everything else keeps `{:.2}`.
fn two_decimals(value: f64) -> String {
    let scaled = value * 100.0;
    if (value * 8.0).fract() == 0.0 && scaled.fract().abs() == 0.5 {
        format!("{:.2}", scaled.round() / 100.0)
    } else {
        format!("{:.2}", value)
    }
}
