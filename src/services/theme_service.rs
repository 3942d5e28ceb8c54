//! Theme generation for the CLI and HTTP API.
//!
//! Accepts base colors as `oklch(...)` text or `#rgb` / `#rrggbb` hex and
//! renders stylesheets with the configured radius and dark selector.

use oklch_theme::{parse_oklch, Oklch, Srgb, Strategy, StylesheetOptions, ThemeSet};

use crate::models::ThemeConfig;

/// Parse a user-supplied base color. Malformed text yields
/// [`Oklch::NEUTRAL`], matching the soft `oklch(...)` parser.
pub fn parse_base_color(text: &str) -> Oklch {
    let trimmed = text.trim();
    if trimmed.starts_with('#') {
        return match trimmed.parse::<Srgb>() {
            Ok(srgb) => Oklch::from(srgb),
            Err(e) => {
                tracing::debug!(color = %trimmed, error = %e, "Invalid hex color, using neutral");
                Oklch::NEUTRAL
            }
        };
    }
    parse_oklch(trimmed)
}

pub struct ThemeService {
    options: StylesheetOptions,
    default_strategy: Strategy,
}

impl ThemeService {
    pub fn new(options: StylesheetOptions, default_strategy: Strategy) -> Self {
        Self {
            options,
            default_strategy,
        }
    }

    pub fn from_config(config: &ThemeConfig) -> Self {
        Self::new(config.stylesheet_options(), config.default_strategy)
    }

    pub fn default_strategy(&self) -> Strategy {
        self.default_strategy
    }

    pub fn options(&self) -> &StylesheetOptions {
        &self.options
    }

    /// All four strategies for `color`
    pub fn generate(&self, color: &str) -> ThemeSet {
        let base = parse_base_color(color);
        tracing::debug!(input = %color, base = %base, "Generating themes");
        ThemeSet::generate(base)
    }

    /// Stylesheet text for one strategy
    pub fn stylesheet(&self, color: &str, strategy: Strategy) -> String {
        self.generate(color).get(strategy).to_css_with(&self.options)
    }

    /// Stylesheet text per strategy, in [`Strategy::ALL`] order
    pub fn stylesheets(&self, color: &str) -> (Oklch, Vec<(Strategy, String)>) {
        let themes = self.generate(color);
        let base = themes.get(Strategy::Standard).base;
        (base, themes.to_css_map(&self.options))
    }
}

impl Default for ThemeService {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
