//! # Conversion Engine
//!
//! Converts amounts between currencies using a [`CurrencyRateTable`].
//!
//! Results are truncated toward zero at two decimal places, never rounded,
//! so a converted price is never shown higher than its true value.
//! A request naming a currency with no rate is logged and answered with the
//! original amount, truncated the same way.

use log::error;

use crate::core::currency::Currency;
use crate::core::rates::CurrencyRateTable;

/// Truncates to two decimal places.
pub fn truncate_to_cents(amount: f64) -> f64 {
    (amount * 100.0).trunc() / 100.0
}

pub struct ConversionEngine<'a> {
    rates: &'a CurrencyRateTable,
}

impl<'a> ConversionEngine<'a> {
    pub fn new(rates: &'a CurrencyRateTable) -> Self {
        Self { rates }
    }

    pub fn convert(&self, amount: f64, from: Currency, to: Currency) -> f64 {
        if from == to {
            return truncate_to_cents(amount);
        }
        self.convert_with(amount, self.rates.rate(from), self.rates.rate(to), from.code(), to.code())
    }

    /// Same as [`convert`](Self::convert) for codes that may fall outside
    /// the enumerated set. Equal codes short-circuit without a rate lookup.
    pub fn convert_codes(&self, amount: f64, from: &str, to: &str) -> f64 {
        if from == to {
            return truncate_to_cents(amount);
        }
        self.convert_with(
            amount,
            self.rates.rate_for_code(from),
            self.rates.rate_for_code(to),
            from,
            to,
        )
    }

    fn convert_with(
        &self,
        amount: f64,
        from_rate: Option<f64>,
        to_rate: Option<f64>,
        from: &str,
        to: &str,
    ) -> f64 {
        match (from_rate, to_rate) {
            (Some(from_rate), Some(to_rate)) => truncate_to_cents(amount * to_rate / from_rate),
            _ => {
                error!("Missing exchange rate for {} or {}", from, to);
                truncate_to_cents(amount)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_never_rounds_up() {
        assert_eq!(truncate_to_cents(1.239), 1.23);
        assert_eq!(truncate_to_cents(0.999), 0.99);
        assert_eq!(truncate_to_cents(42.0), 42.0);
    }

    #[test]
    fn test_same_currency_only_truncates() {
        let rates = CurrencyRateTable::builtin();
        let engine = ConversionEngine::new(&rates);
        assert_eq!(engine.convert(19.999, Currency::Sar, Currency::Sar), 19.99);
    }

    #[test]
    fn test_base_to_riyal() {
        let rates = CurrencyRateTable::builtin();
        let engine = ConversionEngine::new(&rates);
        assert_eq!(engine.convert(100.0, Currency::Usd, Currency::Sar), 375.0);
    }

    #[test]
    fn test_cross_rate_goes_through_base() {
        let rates = CurrencyRateTable::builtin();
        let engine = ConversionEngine::new(&rates);
        // 375 SAR is 100 USD, which is 71 JOD
        assert_eq!(engine.convert(375.0, Currency::Sar, Currency::Jod), 71.0);
    }

    #[test]
    fn test_cross_rate_truncates() {
        let rates = CurrencyRateTable::builtin();
        let engine = ConversionEngine::new(&rates);
        // 10 * 0.71 / 3.75 = 1.8933...
        assert_eq!(engine.convert(10.0, Currency::Sar, Currency::Jod), 1.89);
    }

    #[test]
    fn test_unknown_code_is_soft_noop() {
        let rates = CurrencyRateTable::builtin();
        let engine = ConversionEngine::new(&rates);
        assert_eq!(engine.convert_codes(12.345, "USD", "XYZ"), 12.34);
        assert_eq!(engine.convert_codes(12.345, "XYZ", "SAR"), 12.34);
    }

    #[test]
    fn test_equal_unknown_codes_short_circuit() {
        let rates = CurrencyRateTable::builtin();
        let engine = ConversionEngine::new(&rates);
        assert_eq!(engine.convert_codes(5.555, "XYZ", "XYZ"), 5.55);
    }

    #[test]
    fn test_codes_match_typed_conversion() {
        let rates = CurrencyRateTable::builtin();
        let engine = ConversionEngine::new(&rates);
        assert_eq!(
            engine.convert_codes(250.0, "USD", "EGP"),
            engine.convert(250.0, Currency::Usd, Currency::Egp)
        );
    }
}
