#![allow(clippy::excessive_precision, clippy::module_inception)]

//! oklch-theme: palette reduction and design-token synthesis in OKLCH
//!
//! Given the dominant colors of an image, this crate picks a small set of
//! hue-diverse candidates and turns any one of them into a complete set of
//! semantic design tokens (light and dark, plus a five-step chart ramp)
//! under one of four fixed strategies.
//!
//! # Quick Start
//!
//! ```
//! use oklch_theme::{generate_themes, ColorCluster, Palette, Strategy};
//!
//! // Clusters come from an external pixel-clustering routine
//! let palette = Palette::from_clusters(vec![
//!     ColorCluster::new(51, 102, 255, 0.6),
//!     ColorCluster::new(250, 200, 40, 0.4),
//! ]);
//! let base = palette.to_css_strings()[0].clone();
//!
//! let themes = generate_themes(&base);
//! let css = themes.get(Strategy::Standard).to_css();
//! assert!(css.starts_with(":root {"));
//! assert!(css.contains(".dark {"));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! (r, g, b, area) clusters
//!     |  sort by area, sRGB -> linear -> Oklab -> Oklch
//!     v
//! Palette (<= 5 colors, one per 15-degree hue bucket)
//!     |  caller picks a base color
//!     v
//! ThemeSeed (achromatic?, primary/accent/neutral hue and chroma)
//!     |  per-mode role table + chart ramp
//!     v
//! SemanticTokenSet (light), SemanticTokenSet (dark)
//!     |
//!     v
//! ":root { ... }\n\n.dark { ... }"
//! ```
//!
//! # Failure Policy
//!
//! Nothing in the soft path fails. Unparseable color text becomes
//! [`Oklch::NEUTRAL`] and still produces a (gray-ish) theme; an empty
//! extraction is replaced by [`Palette::fallback`] at the call site.
//!
//! # Thresholds
//!
//! Two achromatic thresholds coexist on purpose: the synthesizer treats base
//! chroma below [`ACHROMATIC_THRESHOLD`] (0.012) as gray, while the chart
//! ramp switches to a lightness-only progression below
//! [`CHART_ACHROMATIC_THRESHOLD`] (0.02) of the mode's primary chroma.

pub mod color;
mod error;
pub mod palette;
pub mod theme;


pub use color::{parse_oklch, LinearRgb, Oklab, Oklch, Srgb, MAX_CHROMA};
pub use error::{ParseColorError, UnknownStrategy};
pub use palette::{ColorCluster, Palette};
pub use theme::{
    synthesize, Mode, SemanticTokenSet, Strategy, StrategyConfig, StylesheetOptions, Theme,
    ThemeSet, TokenRole, ACHROMATIC_THRESHOLD, CHART_ACHROMATIC_THRESHOLD,
};

/// Generate all four strategies' themes from serialized base color text.
///
/// Malformed text falls back to [`Oklch::NEUTRAL`].
pub fn generate_themes(base_color: &str) -> ThemeSet {
    ThemeSet::from_css_text(base_color)
}
