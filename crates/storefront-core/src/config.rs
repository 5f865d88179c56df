//! Storefront shell configuration.
//!
//! Loaded from a JSON file. Every field has a default, so a partial file
//! (or none at all) is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{StorefrontError, StorefrontResult};
use crate::pricing::DEFAULT_CURRENCY_SYMBOL;
use crate::quantity::DEFAULT_MAX_QUANTITY;

pub const DEFAULT_LOG_FILTER: &str = "storefront=info,storefront_ui=info,storefront_core=info";

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Symbol prefixed to every price
    pub currency_symbol: String,
    /// Brand name shown in the header and footer
    pub store_name: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Upper bound for quantity steppers
    pub max_quantity: u32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            store_name: "Storefront".to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            max_quantity: DEFAULT_MAX_QUANTITY,
        }
    }
}

impl StorefrontConfig {
    /// `<config dir>/storefront/config.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("storefront")
            .join("config.json")
    }

    /// Load from an explicit path. A missing file is an error.
    pub fn load(path: impl AsRef<Path>) -> StorefrontResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from [`StorefrontConfig::default_path`], falling back to defaults
    /// when the file does not exist.
    pub fn load_or_default() -> StorefrontResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> StorefrontResult<()> {
        if self.max_quantity == 0 {
            return Err(StorefrontError::Config(
                "max_quantity must be at least 1".to_string(),
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(StorefrontError::Config("log_filter is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, r#"{ "currency_symbol": "€" }"#).unwrap();

        let config = StorefrontConfig::load(&path).unwrap();
        assert_eq!(config.currency_symbol, "\u{20AC}");
        assert_eq!(config.max_quantity, DEFAULT_MAX_QUANTITY);
        assert_eq!(config.store_name, "Storefront");
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let temp = TempDir::new().unwrap();
        let err = StorefrontConfig::load(temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, StorefrontError::Io(_)));
    }

    #[test]
    fn malformed_json_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            StorefrontConfig::load(&path).unwrap_err(),
            StorefrontError::Json(_)
        ));
    }

    #[test]
    fn zero_max_quantity_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, r#"{ "max_quantity": 0 }"#).unwrap();
        assert!(matches!(
            StorefrontConfig::load(&path).unwrap_err(),
            StorefrontError::Config(_)
        ));
    }
}
