//! The four fixed theme strategies.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownStrategy;

/// A named parameter set controlling how a base color is scaled into tokens.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    #[default]
    Standard,
    Vivid,
    Minimal,
    Professional,
}

/// Immutable parameters for one [`Strategy`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyConfig {
    pub strategy: Strategy,
    /// Multiplier applied to the (floored) base chroma for the primary token
    pub chroma_scale: f64,
    /// Added to the primary lightness before clamping
    pub lightness_offset: f64,
    /// Accent hue opposite the primary instead of a 30-degree analogous shift
    pub use_complementary: bool,
    /// Chroma of the popover surface
    pub card_saturation: f64,
}

const STANDARD: StrategyConfig = StrategyConfig {
    strategy: Strategy::Standard,
    chroma_scale: 1.0,
    lightness_offset: 0.0,
    use_complementary: false,
    card_saturation: 0.01,
};

const VIVID: StrategyConfig = StrategyConfig {
    strategy: Strategy::Vivid,
    chroma_scale: 1.3,
    lightness_offset: 0.0,
    use_complementary: false,
    card_saturation: 0.02,
};

const MINIMAL: StrategyConfig = StrategyConfig {
    strategy: Strategy::Minimal,
    chroma_scale: 0.6,
    lightness_offset: 0.1,
    use_complementary: false,
    card_saturation: 0.0,
};

const PROFESSIONAL: StrategyConfig = StrategyConfig {
    strategy: Strategy::Professional,
    chroma_scale: 0.9,
    lightness_offset: -0.05,
    use_complementary: false,
    card_saturation: 0.02,
};

impl Strategy {
    /// All strategies, in output order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Standard,
        Strategy::Vivid,
        Strategy::Minimal,
        Strategy::Professional,
    ];

    pub fn config(self) -> &'static StrategyConfig {
        match self {
            Strategy::Standard => &STANDARD,
            Strategy::Vivid => &VIVID,
            Strategy::Minimal => &MINIMAL,
            Strategy::Professional => &PROFESSIONAL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Standard => "standard",
            Strategy::Vivid => "vivid",
            Strategy::Minimal => "minimal",
            Strategy::Professional => "professional",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    /// Case-insensitive lookup by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}
