//! Theme synthesis: strategies, semantic tokens, chart ramp, stylesheet.

mod chart;
mod strategy;
mod stylesheet;
mod synth;
mod tokens;

pub use chart::{chart_ramp, CHART_ACHROMATIC_THRESHOLD, CHART_MIN_CHROMA, CHART_STEPS};
pub use strategy::{Strategy, StrategyConfig};
pub use stylesheet::StylesheetOptions;
pub use synth::{
    synthesize, Theme, ThemeSeed, ThemeSet, ACHROMATIC_THRESHOLD, FOREGROUND_THRESHOLD,
    NEUTRAL_CHROMA_CAP, PRIMARY_CHROMA_FLOOR,
};
pub use tokens::{Mode, SemanticTokenSet, TokenRole};
