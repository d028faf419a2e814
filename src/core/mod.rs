//! # Core Storefront State
//!
//! Preference and pricing logic shared by every storefront screen.
//! It knows nothing about any specific UI technology or datastore.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │    PreferenceContext    │
//!                    │  language · currency ·  │
//!                    │        wishlist         │
//!                    └───────────┬─────────────┘
//!                                │
//!       ┌────────────────┬───────┴────────┬────────────────┐
//!       ▼                ▼                ▼                ▼
//! ┌────────────┐  ┌────────────┐  ┌────────────┐  ┌────────────┐
//! │Translation │  │ Conversion │  │   Price    │  │  Wishlist  │
//! │   Table    │  │   Engine   │  │ Formatter  │  │            │
//! └────────────┘  └─────┬──────┘  └─────┬──────┘  └────────────┘
//!                       └───────┬───────┘
//!                               ▼
//!                      ┌─────────────────┐
//!                      │CurrencyRateTable│
//!                      └─────────────────┘
//! ```
//!
//! No I/O except in [`config`]. Everything else is synchronous and pure
//! over the current state.
//!
//! ## Modules
//!
//! - [`preferences`]: `PreferenceContext`, the one state object consumers hold
//! - [`translations`]: key → text lookup with raw-key fallback
//! - [`rates`]: validated exchange-rate table
//! - [`conversion`]: truncating currency conversion
//! - [`formatter`]: rounding display formatting
//! - [`wishlist`]: ordered-unique favorites
//! - [`config`]: `~/.nuzul/config.toml` loading and resolution

pub mod config;
pub mod conversion;
pub mod currency;
pub mod formatter;
pub mod language;
pub mod listing;
pub mod preferences;
pub mod rates;
pub mod translations;
pub mod wishlist;

// Re-export commonly used types for convenience
pub use currency::Currency;
pub use language::Language;
pub use listing::Listing;
pub use preferences::{PreferenceContext, SharedPreferences};
