use nuzul::core::config::{self, NuzulConfig};
use nuzul::core::listing::parse_listings;
use nuzul::core::rates::CurrencyRateTable;
use nuzul::core::translations::TranslationTable;
use nuzul::core::{Currency, Language, PreferenceContext};
use std::collections::HashMap;

// ============================================================================
// Helper Functions
// ============================================================================

/// A rate table with base = 1, X (SAR) = 3.75, Y (SYP) = 2500, and every
/// other currency at 1.
fn scenario_rates() -> CurrencyRateTable {
    let mut rates: HashMap<Currency, f64> = Currency::ALL.iter().map(|c| (*c, 1.0)).collect();
    rates.insert(Currency::Sar, 3.75);
    rates.insert(Currency::Syp, 2500.0);
    CurrencyRateTable::new(rates).unwrap()
}

fn scenario_translations() -> TranslationTable {
    let mut table = TranslationTable::new();
    table.insert(Language::Ar, "hotels", "الفنادق");
    table.insert(Language::En, "hotels", "Hotels");
    table
}

fn scenario_context() -> PreferenceContext {
    PreferenceContext::new(scenario_translations(), scenario_rates())
}

// ============================================================================
// Scenario
// ============================================================================

#[test]
fn test_convert_base_to_x() {
    let ctx = scenario_context();
    assert_eq!(ctx.convert_between(100.0, Currency::Usd, Currency::Sar), 375.0);
}

#[test]
fn test_format_x_two_decimals() {
    let ctx = scenario_context();
    assert_eq!(ctx.format_in(100.0, Currency::Sar), "SAR375.00");
}

#[test]
fn test_format_y_whole_units() {
    let ctx = scenario_context();
    assert_eq!(ctx.format_in(1.0, Currency::Syp), "SYP2500");
}

#[test]
fn test_second_locale_lookup() {
    let mut ctx = scenario_context();
    let default_text = ctx.t("hotels").to_string();
    ctx.set_language(Language::En);
    assert_eq!(ctx.t("hotels"), "Hotels");
    assert_ne!(ctx.t("hotels"), default_text);
}

#[test]
fn test_unknown_key_round_trips_exactly() {
    let ctx = scenario_context();
    assert_eq!(ctx.t("view_details"), "view_details");
}

#[test]
fn test_unknown_code_never_fails() {
    let ctx = scenario_context();
    assert_eq!(ctx.convert_codes(10.129, "USD", "ZZZ"), 10.12);
}

#[test]
fn test_read_after_write_observes_write() {
    let mut ctx = scenario_context();
    ctx.set_currency(Currency::Sar);
    assert_eq!(ctx.format(2.0), "SAR7.50");
    ctx.set_currency(Currency::Usd);
    assert_eq!(ctx.format(2.0), "$2.00");
}

#[test]
fn test_isolated_contexts_do_not_share_state() {
    let mut a = scenario_context();
    let b = scenario_context();
    a.wishlist_add("p-1");
    a.set_currency(Currency::Syp);
    assert!(!b.wishlist_contains("p-1"));
    assert_eq!(b.currency(), Currency::Usd);
}

// ============================================================================
// Config → Context
// ============================================================================

#[test]
fn test_context_from_config_file() {
    let toml_str = r#"
[general]
language = "en"
currency = "SAR"

[rates]
SAR = 4.0
"#;
    let file_config: NuzulConfig = toml::from_str(toml_str).unwrap();
    let resolved = config::resolve(&file_config, None, None).unwrap();
    let ctx = PreferenceContext::from_config(&resolved);

    assert_eq!(ctx.language(), Language::En);
    assert_eq!(ctx.t("night"), "night");
    assert_eq!(ctx.convert(10.0), 40.0);
    assert_eq!(ctx.format(10.0), "SAR40.00");
    assert!(ctx.wishlist().is_empty());
}

// ============================================================================
// Datastore rows → display
// ============================================================================

#[test]
fn test_listing_cards_render() {
    let json = r#"[
        { "id": "a", "name": "Palm Court", "type": "Hotel", "price": 100, "currency": "SAR" },
        { "id": "b", "name": "Desert Camp", "type": "Guesthouse", "price": 1, "currency": "SYP" },
        { "id": "c", "name": "Harbor Flat", "type": "Apartment", "price": 20, "currency": "GBP" }
    ]"#;
    let listings = parse_listings(json).unwrap();
    let mut ctx = PreferenceContext::default();
    ctx.wishlist_add("b");

    let prices: Vec<String> = listings.iter().map(|l| ctx.listing_price(l)).collect();
    assert_eq!(prices, vec!["SAR375.00", "SYP2500", "$20.00"]);
    assert!(ctx.wishlist_contains(&listings[1].id));
}
