//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::Currency;

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where cart and wishlist state is kept.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Review service settings.
    #[serde(default)]
    pub reviews: ReviewsConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "json")
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// State directory, relative to the config file's directory.
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

fn default_storage_dir() -> String {
    ".storefront".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

/// Review service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewsConfig {
    /// Simulated service delay in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// How long fetched summaries stay fresh, in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_cache_ttl_secs() -> u64 {
    30 * 60
}

impl ReviewsConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency prices are shown in.
    #[serde(default)]
    pub currency: Currency,
}

/// Catalog configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON product list replacing the bundled catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront configuration

[storage]
# Cart and wishlist state, relative to this file
dir = ".storefront"

[reviews]
delay_ms = 1000
cache_ttl_secs = 1800

[display]
# One of INR, USD, EUR, GBP
currency = "INR"

[catalog]
# path = "products.json"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: CliConfig = toml::from_str("[display]\ncurrency = \"USD\"\n").unwrap();
        assert_eq!(config.display.currency, Currency::USD);
        assert_eq!(config.storage.dir, ".storefront");
        assert_eq!(config.reviews.cache_ttl(), Duration::from_secs(1800));
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_load_toml_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.reviews.delay_ms = 0;
        config.catalog.path = Some("products.json".to_string());

        let toml_path = dir.path().join("storefront.toml");
        std::fs::write(&toml_path, toml::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(CliConfig::load(&toml_path).unwrap(), config);

        let json_path = dir.path().join("storefront.json");
        std::fs::write(&json_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(CliConfig::load(&json_path).unwrap(), config);
    }

    #[test]
    fn test_rejects_unknown_currency() {
        assert!(toml::from_str::<CliConfig>("[display]\ncurrency = \"JPY\"\n").is_err());
    }
}
