pub mod config;

pub use config::{AppConfig, ExtractionConfig, ServerConfig, ThemeConfig};
