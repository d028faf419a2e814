//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.nuzul/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Rates and translations in the file are layered over the built-in
//! tables; anything not mentioned keeps its shipped value.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::currency::Currency;
use crate::core::language::Language;
use crate::core::rates::{CurrencyRateTable, RateTableError};
use crate::core::translations::TranslationTable;

// ============================================================================
// Config Structs (all fields optional for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NuzulConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    /// Currency code → units per one base unit.
    #[serde(default)]
    pub rates: BTreeMap<String, f64>,
    /// Language code → key → text.
    #[serde(default)]
    pub translations: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub language: Option<Language>,
    pub currency: Option<Currency>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub language: Language,
    pub currency: Currency,
    pub rates: CurrencyRateTable,
    pub translations: TranslationTable,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Rates(RateTableError),
    /// A value that parsed as TOML but names nothing we support.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Rates(e) => write!(f, "config rates error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<RateTableError> for ConfigError {
    fn from(e: RateTableError) -> Self {
        ConfigError::Rates(e)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.nuzul/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".nuzul").join("config.toml"))
}

/// Load config from `~/.nuzul/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NuzulConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<NuzulConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(NuzulConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(NuzulConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. The file must exist.
pub fn load_config_from(path: &Path) -> Result<NuzulConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: NuzulConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Nuzul Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# language = "ar"                    # "ar" or "en"
# currency = "USD"                   # Any supported ISO code

# Units of each currency per 1 USD. USD itself must stay 1.
# [rates]
# SAR = 3.75
# SYP = 2500
# EGP = 50.2

# Replace or add display strings per language.
# [translations.en]
# hotels = "Hotels"
# [translations.ar]
# hotels = "الفنادق"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_language` and `cli_currency` are from CLI flags (None = not specified).
pub fn resolve(
    config: &NuzulConfig,
    cli_language: Option<Language>,
    cli_currency: Option<Currency>,
) -> Result<ResolvedConfig, ConfigError> {
    // Language: CLI → env → config → default
    let language = cli_language
        .or_else(|| env_value::<Language>("NUZUL_LANGUAGE"))
        .or(config.general.language)
        .unwrap_or_default();

    // Currency: CLI → env → config → base
    let currency = cli_currency
        .or_else(|| env_value::<Currency>("NUZUL_CURRENCY"))
        .or(config.general.currency)
        .unwrap_or(Currency::BASE);

    let rates = if config.rates.is_empty() {
        CurrencyRateTable::builtin()
    } else {
        CurrencyRateTable::with_overrides(&config.rates)?
    };

    let mut translations = TranslationTable::builtin();
    if !config.translations.is_empty() {
        translations.merge(&translation_overrides(config)?);
    }

    Ok(ResolvedConfig {
        language,
        currency,
        rates,
        translations,
    })
}

/// Reads and parses an env var. Unparseable values are warned about and ignored.
fn env_value<T: std::str::FromStr>(name: &str) -> Option<T>
where
    T::Err: fmt::Display,
{
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {}: {}", name, e);
            None
        }
    }
}

fn translation_overrides(
    config: &NuzulConfig,
) -> Result<BTreeMap<Language, BTreeMap<String, String>>, ConfigError> {
    config
        .translations
        .iter()
        .map(|(code, entries)| -> Result<_, ConfigError> {
            let language = code
                .parse::<Language>()
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;
            Ok((language, entries.clone()))
        })
        .collect()
}
