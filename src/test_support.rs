//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::listing::Listing;
use crate::core::preferences::PreferenceContext;
use crate::core::rates::CurrencyRateTable;
use crate::core::translations::TranslationTable;

/// Creates a context over the built-in tables in its initial state.
pub fn test_context() -> PreferenceContext {
    PreferenceContext::new(TranslationTable::builtin(), CurrencyRateTable::builtin())
}

/// Creates a listing row with placeholder name and type.
pub fn listing(id: &str, price: f64, currency: &str) -> Listing {
    Listing {
        id: id.to_string(),
        name: format!("Listing {id}"),
        kind: "Hotel".to_string(),
        price,
        currency: currency.to_string(),
        rating: None,
        description: None,
    }
}
