//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (later overrides earlier)
//! 1. Defaults (this file)
//! 2. Config file (`config.toml` in the platform config dir)
//! 3. Environment variables (`SHOPDESK_*`)
//!
//! ```toml
//! # config.toml
//! store_name = "Saigon Ceramics Admin"
//! currency_code = "VND"
//! currency_symbol = "₫"
//! default_report_year = 2025
//! ```
//!
//! In the file the three currency fields are independent. The
//! `SHOPDESK_CURRENCY` variable sets all three at once (see
//! `ConfigState::load`).
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use shopdesk_core::validation::validate_report_year;
use shopdesk_core::{DEFAULT_REPORT_YEAR, DEFAULT_SEARCH_MAX_PRICE, DEFAULT_SHOP_ID};

/// File name looked up in the config dir.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Symbol and decimal places filled in when only a currency code is given.
const KNOWN_CURRENCIES: &[(&str, &str, u8)] = &[
    ("VND", "₫", 0),
    ("USD", "$", 2),
    ("EUR", "€", 2),
    ("GBP", "£", 2),
    ("JPY", "¥", 0),
];

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Application configuration.
///
/// Serialized as-is for the `get_config` command, so the frontend can
/// format prices the same way the backend logs them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigState {
    /// Shown in the window title and the top bar.
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places the stored integer amounts carry.
    /// Default: 0 (prices are whole units)
    pub currency_decimals: u8,

    /// Shop that newly created products belong to.
    pub default_shop_id: i64,

    /// Year the revenue report opens on.
    pub default_report_year: i32,

    /// Price ceiling used when a search omits one.
    pub default_search_max_price: i64,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Shopdesk".to_string(),
            currency_code: "VND".to_string(),
            currency_symbol: "₫".to_string(),
            currency_decimals: 0,
            default_shop_id: DEFAULT_SHOP_ID,
            default_report_year: DEFAULT_REPORT_YEAR,
            default_search_max_price: DEFAULT_SEARCH_MAX_PRICE,
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `SHOPDESK_*` overrides. Unparseable numbers are ignored.
    ///
    /// `SHOPDESK_CURRENCY` replaces the code, symbol and decimals together.
    /// For a code outside [`KNOWN_CURRENCIES`] the code doubles as the symbol
    /// and the decimals are kept; `SHOPDESK_CURRENCY_SYMBOL` and
    /// `SHOPDESK_CURRENCY_DECIMALS` are applied afterwards to adjust either.
    fn apply_env_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = var("SHOPDESK_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(code) = var("SHOPDESK_CURRENCY") {
            debug!(currency = %code, "Overriding currency from environment");
            self.set_currency(&code);
        }

        if let Some(symbol) = var("SHOPDESK_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(decimals) = var("SHOPDESK_CURRENCY_DECIMALS") {
            match decimals.parse() {
                Ok(decimals) => self.currency_decimals = decimals,
                Err(_) => warn!(value = %decimals, "Ignoring invalid SHOPDESK_CURRENCY_DECIMALS"),
            }
        }

        if let Some(id) = var("SHOPDESK_SHOP_ID") {
            match id.parse() {
                Ok(id) => self.default_shop_id = id,
                Err(_) => warn!(value = %id, "Ignoring invalid SHOPDESK_SHOP_ID"),
            }
        }

        if let Some(year) = var("SHOPDESK_REPORT_YEAR") {
            match year.parse() {
                Ok(year) => self.default_report_year = year,
                Err(_) => warn!(value = %year, "Ignoring invalid SHOPDESK_REPORT_YEAR"),
            }
        }
    }

    /// Switches to `code`, taking symbol and decimals from [`KNOWN_CURRENCIES`].
    fn set_currency(&mut self, code: &str) {
        let code = code.trim().to_ascii_uppercase();

        match KNOWN_CURRENCIES.iter().find(|(known, _, _)| *known == code) {
            Some((_, symbol, decimals)) => {
                self.currency_symbol = symbol.to_string();
                self.currency_decimals = *decimals;
            }
            None => {
                warn!(currency = %code, "Unknown currency, using its code as the symbol");
                self.currency_symbol = code.clone();
            }
        }

        self.currency_code = code;
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_shop_id <= 0 {
            return Err(ConfigError::Invalid(format!(
                "default_shop_id must be positive, got {}",
                self.default_shop_id
            )));
        }

        validate_report_year(self.default_report_year)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if self.default_search_max_price < 0 {
            return Err(ConfigError::Invalid(
                "default_search_max_price must not be negative".into(),
            ));
        }

        if self.currency_decimals > 4 {
            return Err(ConfigError::Invalid(format!(
                "currency_decimals must be at most 4, got {}",
                self.currency_decimals
            )));
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shopdesk", "admin")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Formats a stored amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1_250_000), "1,250,000₫");
    /// ```
    pub fn format_currency(&self, amount: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = group_thousands((amount / divisor).unsigned_abs());
        let sign = if amount < 0 { "-" } else { "" };

        let number = if self.currency_decimals > 0 {
            format!(
                "{}.{:0width$}",
                whole,
                (amount % divisor).abs(),
                width = self.currency_decimals as usize
            )
        } else {
            whole
        };

        // Dong-style symbols trail the number, dollar-style lead it
        if self.currency_code == "VND" {
            format!("{sign}{number}{}", self.currency_symbol)
        } else {
            format!("{sign}{}{number}", self.currency_symbol)
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn usd() -> ConfigState {
        ConfigState {
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            ..ConfigState::default()
        }
    }

    #[test]
    fn test_format_currency_whole_units() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(0), "0₫");
        assert_eq!(config.format_currency(999), "999₫");
        assert_eq!(config.format_currency(1_250_000), "1,250,000₫");
        assert_eq!(config.format_currency(-45_000), "-45,000₫");
    }

    #[test]
    fn test_format_currency_with_decimals() {
        let config = usd();
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(-1234), "-$12.34");
        assert_eq!(config.format_currency(123456789), "$1,234,567.89");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ConfigState = toml::from_str(r#"store_name = "Corner Books""#).unwrap();
        assert_eq!(config.store_name, "Corner Books");
        assert_eq!(config.default_report_year, DEFAULT_REPORT_YEAR);
        assert_eq!(config.default_shop_id, DEFAULT_SHOP_ID);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("SHOPDESK_STORE_NAME", "Hue Silk"),
            ("SHOPDESK_SHOP_ID", "4"),
            ("SHOPDESK_REPORT_YEAR", "2024"),
            ("SHOPDESK_CURRENCY", "USD"),
        ]);

        let mut config = ConfigState::default();
        config.apply_env_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.store_name, "Hue Silk");
        assert_eq!(config.default_shop_id, 4);
        assert_eq!(config.default_report_year, 2024);
        assert_eq!(
            config,
            ConfigState {
                store_name: "Hue Silk".to_string(),
                default_shop_id: 4,
                default_report_year: 2024,
                ..usd()
            }
        );
    }

    #[test]
    fn test_env_currency_sets_symbol_and_decimals() {
        let mut config = ConfigState::default();
        config.apply_env_overrides(|k| (k == "SHOPDESK_CURRENCY").then(|| "usd".to_string()));

        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.format_currency(100_000), "$1,000.00");

        config.apply_env_overrides(|k| (k == "SHOPDESK_CURRENCY").then(|| "VND".to_string()));
        assert_eq!(config.format_currency(100_000), "100,000₫");
    }

    #[test]
    fn test_env_unknown_currency_uses_code_as_symbol() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("SHOPDESK_CURRENCY", "THB"),
            ("SHOPDESK_CURRENCY_SYMBOL", "฿"),
            ("SHOPDESK_CURRENCY_DECIMALS", "2"),
        ]);

        let mut config = ConfigState::default();
        config.apply_env_overrides(|k| (k == "SHOPDESK_CURRENCY").then(|| "THB".to_string()));
        assert_eq!(config.currency_symbol, "THB");
        assert_eq!(config.currency_decimals, 0);

        config.apply_env_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.format_currency(123_456), "฿1,234.56");
    }

    #[test]
    fn test_invalid_env_numbers_are_ignored() {
        let mut config = ConfigState::default();
        config.apply_env_overrides(|k| match k {
            "SHOPDESK_SHOP_ID" => Some("abc".to_string()),
            "SHOPDESK_REPORT_YEAR" => Some("next".to_string()),
            "SHOPDESK_CURRENCY_DECIMALS" => Some("two".to_string()),
            _ => None,
        });
        assert_eq!(config, ConfigState::default());
    }

    #[test]
    fn test_validate() {
        assert!(ConfigState::default().validate().is_ok());

        let bad_year = ConfigState {
            default_report_year: 1850,
            ..ConfigState::default()
        };
        assert!(matches!(bad_year.validate(), Err(ConfigError::Invalid(_))));

        let bad_shop = ConfigState {
            default_shop_id: 0,
            ..ConfigState::default()
        };
        assert!(bad_shop.validate().is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("shopdesk-missing-config-test.toml");
        let config = ConfigState::from_file(&path).unwrap();
        assert_eq!(config, ConfigState::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("shopdesk-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "store_name = [").unwrap();
        let result = ConfigState::from_file(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
