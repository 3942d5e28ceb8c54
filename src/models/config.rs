use crate::assets::AssetLoader;
use oklch_theme::{Strategy, StylesheetOptions};
use serde::{Deserialize, Deserializer};
use std::time::Duration;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub extraction: ExtractionConfig,

    #[serde(default)]
    pub themes: ThemeConfig,
}

/// HTTP server settings
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Listen address; the BIND_ADDR env var takes precedence
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "0.0.0.0:3000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Image fetching, sampling and clustering settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ExtractionConfig {
    pub fetch_timeout_secs: u64,
    pub max_image_bytes: usize,
    pub sample_pixels: usize,
    /// k for k-means; images with fewer distinct colors are reported exactly
    pub cluster_count: usize,
    pub min_alpha: u8,
    /// Zero disables the palette cache
    pub cache_ttl_secs: u64,
    pub cache_max_entries: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: 10,
            max_image_bytes: 10 * 1024 * 1024,
            sample_pixels: 40_000,
            cluster_count: 8,
            min_alpha: 128,
            cache_ttl_secs: 3600,
            cache_max_entries: 100,
        }
    }
}

impl ExtractionConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

/// Stylesheet output settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "deserialize_strategy")]
    pub default_strategy: Strategy,
    pub radius: String,
    pub dark_selector: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let options = StylesheetOptions::default();
        Self {
            default_strategy: Strategy::default(),
            radius: options.radius,
            dark_selector: options.dark_selector,
        }
    }
}

impl ThemeConfig {
    pub fn stylesheet_options(&self) -> StylesheetOptions {
        StylesheetOptions {
            radius: self.radius.clone(),
            dark_selector: self.dark_selector.clone(),
        }
    }
}

fn deserialize_strategy<'de, D>(deserializer: D) -> Result<Strategy, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        bind = %config.server.bind,
                        default_strategy = %config.themes.default_strategy,
                        cache_ttl_secs = config.extraction.cache_ttl_secs,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Bind address, with BIND_ADDR taking precedence over the config file
    pub fn bind_addr(&self) -> String {
        std::env::var("BIND_ADDR").unwrap_or_else(|_| self.server.bind.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.bind, "0.0.0.0:3000");
        assert_eq!(config.extraction.sample_pixels, 40_000);
        assert_eq!(config.extraction.min_alpha, 128);
        assert_eq!(config.extraction.fetch_timeout(), Duration::from_secs(10));
        assert_eq!(config.themes.default_strategy, Strategy::Standard);
        assert_eq!(config.themes.radius, "0.5rem");
        assert_eq!(config.themes.dark_selector, ".dark");
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        let loader = AssetLoader::new(None);
        let text = loader.read_config_string().unwrap();
        let config: AppConfig = serde_yaml::from_str(&text).unwrap();
        let defaults = AppConfig::default();

        assert_eq!(config.server.bind, defaults.server.bind);
        assert_eq!(config.extraction.max_image_bytes, defaults.extraction.max_image_bytes);
        assert_eq!(config.extraction.sample_pixels, defaults.extraction.sample_pixels);
        assert_eq!(config.extraction.cluster_count, defaults.extraction.cluster_count);
        assert_eq!(config.extraction.cache_max_entries, defaults.extraction.cache_max_entries);
        assert_eq!(config.themes.default_strategy, defaults.themes.default_strategy);
        assert_eq!(config.themes.radius, defaults.themes.radius);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let yaml = r#"
extraction:
  sample_pixels: 500
themes:
  default_strategy: Vivid
  dark_selector: "[data-theme=dark]"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.extraction.sample_pixels, 500);
        assert_eq!(config.extraction.min_alpha, 128);
        assert_eq!(config.themes.default_strategy, Strategy::Vivid);
        assert_eq!(config.themes.radius, "0.5rem");

        let options = config.themes.stylesheet_options();
        assert_eq!(options.dark_selector, "[data-theme=dark]");
        assert_eq!(config.server.bind, "0.0.0.0:3000");
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let yaml = "themes:\n  default_strategy: neon\n";
        let err = serde_yaml::from_str::<AppConfig>(yaml).unwrap_err();
        assert!(err.to_string().contains("unknown theme strategy"));
    }

    #[test]
    fn test_empty_config() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.extraction.cache_ttl_secs, 3600);
    }
}
