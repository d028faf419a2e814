//! # Preference Context
//!
//! The storefront's one piece of shared state: the active language, the
//! active currency, and the wishlist, composed with the translation and
//! rate tables every screen reads through.
//!
//! ```text
//! PreferenceContext
//! ├── language: Language             // active locale, default Ar
//! ├── currency: Currency             // active currency, default USD
//! ├── wishlist: Wishlist             // favorited listing ids
//! ├── translations: TranslationTable // key → text per language
//! └── rates: CurrencyRateTable       // units per base unit
//! ```
//!
//! Construct one at startup and pass it to consumers by reference. Tests
//! build isolated instances with their own tables through [`PreferenceContext::new`].
//! Hosts that touch it from more than one thread wrap it in
//! [`SharedPreferences`].

use log::{info, warn};
use std::sync::{Arc, Mutex, PoisonError};

use crate::core::config::ResolvedConfig;
use crate::core::conversion::ConversionEngine;
use crate::core::currency::{Currency, ParseCurrencyError};
use crate::core::formatter::PriceFormatter;
use crate::core::language::{Language, ParseLanguageError};
use crate::core::listing::Listing;
use crate::core::rates::CurrencyRateTable;
use crate::core::translations::TranslationTable;
use crate::core::wishlist::Wishlist;

#[derive(Debug, Clone)]
pub struct PreferenceContext {
    language: Language,
    currency: Currency,
    wishlist: Wishlist,
    translations: TranslationTable,
    rates: CurrencyRateTable,
}

impl Default for PreferenceContext {
    fn default() -> Self {
        Self::new(TranslationTable::builtin(), CurrencyRateTable::builtin())
    }
}

impl PreferenceContext {
    /// Starts at the default locale, the base currency and an empty wishlist.
    pub fn new(translations: TranslationTable, rates: CurrencyRateTable) -> Self {
        Self {
            language: Language::default(),
            currency: Currency::BASE,
            wishlist: Wishlist::new(),
            translations,
            rates,
        }
    }

    /// Starts at the configured language and currency instead of the defaults.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut ctx = Self::new(config.translations.clone(), config.rates.clone());
        ctx.language = config.language;
        ctx.currency = config.currency;
        ctx
    }

    // ── Selectors ───────────────────────────────────────────────────────────

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn set_language(&mut self, language: Language) {
        info!("Language set to {}", language);
        self.language = language;
    }

    pub fn set_currency(&mut self, currency: Currency) {
        info!("Currency set to {}", currency);
        self.currency = currency;
    }

    /// Parses and applies a language code. The selection is unchanged on error.
    pub fn set_language_code(&mut self, code: &str) -> Result<(), ParseLanguageError> {
        self.set_language(code.parse()?);
        Ok(())
    }

    /// Parses and applies a currency code. The selection is unchanged on error.
    pub fn set_currency_code(&mut self, code: &str) -> Result<(), ParseCurrencyError> {
        self.set_currency(code.parse()?);
        Ok(())
    }

    pub fn translations(&self) -> &TranslationTable {
        &self.translations
    }

    pub fn rates(&self) -> &CurrencyRateTable {
        &self.rates
    }

    // ── Translation ─────────────────────────────────────────────────────────

    /// Text for `key` in the active language, or `key` itself.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations.lookup(key, self.language)
    }

    pub fn lookup<'a>(&'a self, key: &'a str, language: Language) -> &'a str {
        self.translations.lookup(key, language)
    }

    // ── Pricing ─────────────────────────────────────────────────────────────

    /// Base currency → active currency, truncated to cents.
    pub fn convert(&self, amount: f64) -> f64 {
        self.convert_between(amount, Currency::BASE, self.currency)
    }

    pub fn convert_between(&self, amount: f64, from: Currency, to: Currency) -> f64 {
        ConversionEngine::new(&self.rates).convert(amount, from, to)
    }

    /// Conversion by free-form codes. Unknown codes log and return the
    /// amount unchanged apart from truncation.
    pub fn convert_codes(&self, amount: f64, from: &str, to: &str) -> f64 {
        ConversionEngine::new(&self.rates).convert_codes(amount, from, to)
    }

    /// Formats a base-currency amount in the active currency.
    pub fn format(&self, amount: f64) -> String {
        self.format_in(amount, self.currency)
    }

    pub fn format_in(&self, amount: f64, currency: Currency) -> String {
        PriceFormatter::new(&self.rates).format(amount, currency)
    }

    /// Formats a listing's stored price in the listing's own currency, the
    /// way the storefront cards do. The stored price is passed to the
    /// formatter as-is. Unsupported codes fall back to the active currency.
    pub fn listing_price(&self, listing: &Listing) -> String {
        match listing.currency() {
            Some(currency) => self.format_in(listing.price, currency),
            None => {
                warn!(
                    "Listing {} has unsupported currency '{}', showing {}",
                    listing.id, listing.currency, self.currency
                );
                self.format(listing.price)
            }
        }
    }

    // ── Wishlist ────────────────────────────────────────────────────────────

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn wishlist_add(&mut self, id: &str) {
        self.wishlist.add(id);
    }

    pub fn wishlist_remove(&mut self, id: &str) {
        self.wishlist.remove(id);
    }

    pub fn wishlist_contains(&self, id: &str) -> bool {
        self.wishlist.contains(id)
    }

    pub fn wishlist_toggle(&mut self, id: &str) -> bool {
        self.wishlist.toggle(id)
    }

    pub fn wishlist_clear(&mut self) {
        self.wishlist.clear();
    }
}

/// A [`PreferenceContext`] behind one mutex, for multi-threaded hosts.
///
/// Each [`with`](Self::with) call holds the lock for the whole closure, so
/// reading the active currency and formatting with it cannot interleave
/// with a concurrent `set_currency`.
#[derive(Debug, Clone, Default)]
pub struct SharedPreferences {
    inner: Arc<Mutex<PreferenceContext>>,
}

impl SharedPreferences {
    pub fn new(ctx: PreferenceContext) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ctx)),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut PreferenceContext) -> R) -> R {
        // Every mutation is a single assignment or Vec op, so a poisoned
        // lock still guards consistent state.
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }
}
