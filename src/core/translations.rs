//! # Translation Table
//!
//! Static bilingual key → text mapping.
//!
//! Lookups never fail: a key with no text for the requested language is
//! returned unchanged, so untranslated UI shows the raw key rather than
//! blanking out. There is no interpolation or pluralization.

use log::{debug, warn};
use std::collections::{BTreeMap, HashMap};

use crate::core::language::Language;

#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    strings: HashMap<Language, HashMap<String, String>>,
}

impl TranslationTable {
    /// An empty table. Every lookup falls back to the key.
    pub fn new() -> Self {
        Self::default()
    }

    /// The storefront's shipped strings.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (key, en, ar) in BUILTIN_STRINGS {
            table.insert(Language::En, *key, *en);
            table.insert(Language::Ar, *key, *ar);
        }
        table
    }

    pub fn insert(&mut self, language: Language, key: impl Into<String>, text: impl Into<String>) {
        self.strings
            .entry(language)
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Layers `overrides` on top of the existing entries, replacing any
    /// text already present for the same language and key.
    pub fn merge(&mut self, overrides: &BTreeMap<Language, BTreeMap<String, String>>) {
        for (language, entries) in overrides {
            for (key, text) in entries {
                self.insert(*language, key.as_str(), text.as_str());
            }
        }
        for (language, key) in self.missing_keys() {
            warn!("Translation key '{}' has no {} text", key, language);
        }
    }

    /// Returns the text for `key` in `language`, or `key` itself.
    /// Empty text counts as missing.
    pub fn lookup<'a>(&'a self, key: &'a str, language: Language) -> &'a str {
        match self
            .strings
            .get(&language)
            .and_then(|entries| entries.get(key))
        {
            Some(text) if !text.is_empty() => text.as_str(),
            _ => {
                debug!("No {} translation for '{}'", language, key);
                key
            }
        }
    }

    /// Keys present for some language but absent for another, sorted.
    pub fn missing_keys(&self) -> Vec<(Language, String)> {
        let mut all_keys: Vec<&String> = self.strings.values().flat_map(|m| m.keys()).collect();
        all_keys.sort();
        all_keys.dedup();

        let mut missing = Vec::new();
        for language in Language::ALL {
            let entries = self.strings.get(&language);
            for key in &all_keys {
                if !entries.is_some_and(|m| m.contains_key(*key)) {
                    missing.push((language, (*key).clone()));
                }
            }
        }
        missing
    }

    pub fn len(&self, language: Language) -> usize {
        self.strings.get(&language).map_or(0, HashMap::len)
    }
}

const BUILTIN_STRINGS: &[(&str, &str, &str)] = &[
    // Navigation
    ("home", "Home", "الرئيسية"),
    ("tour_guides", "Tour Guides", "المرشدون السياحيون"),
    ("search", "Search", "بحث"),
    // Search
    ("search_title", "...Find Your Perfect Stay", "…مكانك بين أهلك وناسك"),
    ("search_subtitle", "Discover luxury accommodations", "اكتشف أماكن اقامتك الفاخرة"),
    ("nuzl", "Nuzul", "نـُزل"),
    ("where_to", "Where to?", "إلى أين؟"),
    ("check_in", "Check in", "تسجيل الدخول"),
    ("check_out", "Check out", "تسجيل الخروج"),
    ("guests", "Guests", "الضيوف"),
    // Property types
    ("hotels", "Hotels", "الفنادق"),
    ("apartments", "Apartments", "الشقق الفندقية او المخدومة"),
    ("resorts", "Resorts & Chalets", "المنتجعات والشاليهات"),
    ("huts", "Huts & Camps", "الأكواخ والمخيمات"),
    ("featured_hotels", "Featured Hotels", "الفنادق المميزة"),
    ("explore_properties", "Explore our handpicked properties", "استكشف عقاراتنا المختارة"),
    ("property_types", "Property Types", "أنواع العقارات"),
    ("night", "night", "ليلة"),
    ("view_details", "View Details", "عرض التفاصيل"),
    ("view_all_properties", "View All Properties", "عرض جميع العقارات"),
    // Common
    ("loading", "Loading...", "جاري التحميل..."),
    ("error", "Error", "خطأ"),
    ("retry", "Retry", "إعادة المحاولة"),
    ("no_results", "No results found", "لا توجد نتائج"),
    ("try_different_filters", "Try different filters", "جرب مرشحات مختلفة"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup_per_language() {
        let table = TranslationTable::builtin();
        assert_eq!(table.lookup("hotels", Language::En), "Hotels");
        assert_eq!(table.lookup("hotels", Language::Ar), "الفنادق");
    }

    #[test]
    fn test_unknown_key_returns_key() {
        let table = TranslationTable::builtin();
        assert_eq!(table.lookup("no_such_key", Language::En), "no_such_key");
        assert_eq!(TranslationTable::new().lookup("home", Language::Ar), "home");
    }

    #[test]
    fn test_empty_text_falls_back_to_key() {
        let mut table = TranslationTable::new();
        table.insert(Language::En, "blank", "");
        assert_eq!(table.lookup("blank", Language::En), "blank");
    }

    #[test]
    fn test_builtin_is_complete_in_both_languages() {
        let table = TranslationTable::builtin();
        assert!(table.missing_keys().is_empty());
        assert_eq!(table.len(Language::En), table.len(Language::Ar));
    }

    #[test]
    fn test_missing_keys_reports_gaps() {
        let mut table = TranslationTable::new();
        table.insert(Language::En, "only_en", "Only English");
        assert_eq!(
            table.missing_keys(),
            vec![(Language::Ar, "only_en".to_string())]
        );
    }

    #[test]
    fn test_merge_overrides_existing_text() {
        let mut table = TranslationTable::builtin();
        let mut en = BTreeMap::new();
        en.insert("hotels".to_string(), "Stays".to_string());
        let mut overrides = BTreeMap::new();
        overrides.insert(Language::En, en);

        table.merge(&overrides);
        assert_eq!(table.lookup("hotels", Language::En), "Stays");
        assert_eq!(table.lookup("hotels", Language::Ar), "الفنادق");
    }
}
