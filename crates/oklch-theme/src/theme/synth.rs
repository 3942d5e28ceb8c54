//! Strategy-driven token synthesis.
//!
//! One base color is analysed once into a [`ThemeSeed`]; both modes are then
//! derived from the seed with independent per-mode parameters. The seed holds
//! the achromatic decision, so every token sees the same answer.

use super::chart::chart_ramp;
use super::strategy::{Strategy, StrategyConfig};
use super::tokens::{Mode, SemanticTokenSet, TokenRole};
use crate::color::{clamp_range, normalize_hue, parse_oklch, Oklch};

/// Base chroma below this is treated as gray.
pub const ACHROMATIC_THRESHOLD: f64 = 0.012;

/// Minimum base chroma used for the primary token of a chromatic base.
pub const PRIMARY_CHROMA_FLOOR: f64 = 0.11;

/// Upper bound on surface tint chroma.
pub const NEUTRAL_CHROMA_CAP: f64 = 0.015;

/// Foregrounds switch from light to dark text above this background lightness.
pub const FOREGROUND_THRESHOLD: f64 = 0.70;

const FOREGROUND_DARK_L: f64 = 0.14;
const FOREGROUND_LIGHT_L: f64 = 0.98;

/// Fixed warm red for destructive actions.
const DESTRUCTIVE_HUE: f64 = 25.0;
const DESTRUCTIVE_CHROMA: f64 = 0.22;

/// Quantities derived once from the base color and strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeSeed {
    pub achromatic: bool,
    pub primary_hue: f64,
    pub accent_hue: f64,
    /// Floored and strategy-scaled primary chroma
    pub primary_chroma: f64,
    /// Dark-mode accent chroma before halving
    pub accent_chroma: f64,
    /// Tint applied to surfaces, borders and foregrounds
    pub neutral_chroma: f64,
    pub neutral_hue: f64,
    /// Popover chroma
    pub card_saturation: f64,
    pub lightness_offset: f64,
}

impl ThemeSeed {
    pub fn new(base: Oklch, config: &StrategyConfig) -> Self {
        let achromatic = base.is_achromatic(ACHROMATIC_THRESHOLD);

        let primary_hue = if achromatic { 0.0 } else { base.h };

        let accent_hue = if config.strategy == Strategy::Vivid || achromatic {
            primary_hue
        } else if config.use_complementary {
            normalize_hue(primary_hue + 180.0)
        } else {
            normalize_hue(primary_hue + 30.0)
        };

        let (primary_chroma, neutral_chroma, accent_chroma, card_saturation) = if achromatic {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let primary = base.c.max(PRIMARY_CHROMA_FLOOR) * config.chroma_scale;
            (
                primary,
                (base.c * 0.2).min(NEUTRAL_CHROMA_CAP),
                primary.max(0.12),
                config.card_saturation,
            )
        };

        let neutral_hue = if config.strategy == Strategy::Minimal {
            0.0
        } else {
            primary_hue
        };

        Self {
            achromatic,
            primary_hue,
            accent_hue,
            primary_chroma,
            accent_chroma,
            neutral_chroma,
            neutral_hue,
            card_saturation,
            lightness_offset: config.lightness_offset,
        }
    }

    fn neutral(&self, l: f64, chroma_factor: f64) -> Oklch {
        Oklch::new(l, self.neutral_chroma * chroma_factor, self.neutral_hue)
    }

    /// Primary token for `mode`.
    pub fn primary(&self, mode: Mode) -> Oklch {
        match mode {
            Mode::Light => Oklch::new(
                clamp_range(0.45, 0.65, 0.55 + self.lightness_offset),
                self.primary_chroma,
                self.primary_hue,
            ),
            // Dark mode runs slightly less chroma to reduce eye strain
            Mode::Dark => Oklch::new(
                clamp_range(0.55, 0.75, 0.63 + self.lightness_offset),
                self.primary_chroma * 0.9,
                self.primary_hue,
            ),
        }
    }

    /// Text color for a given background: near-black on light surfaces,
    /// near-white otherwise.
    pub fn foreground_for(&self, background: Oklch) -> Oklch {
        let l = if background.l > FOREGROUND_THRESHOLD {
            FOREGROUND_DARK_L
        } else {
            FOREGROUND_LIGHT_L
        };
        self.neutral(l, 1.0)
    }

    fn surfaces(&self, mode: Mode) -> Surfaces {
        let primary = self.primary(mode);
        match mode {
            Mode::Light => Surfaces {
                background: self.neutral(0.96, 0.15),
                card: self.neutral(1.0, 0.3),
                popover: Oklch::new(0.99, self.card_saturation, self.neutral_hue),
                muted: self.neutral(0.94, 0.5),
                border: self.neutral(0.87, 0.1),
                input: self.neutral(0.87, 2.0),
                primary,
                secondary: Oklch::new(0.95, self.primary_chroma * 0.1, self.neutral_hue),
                accent: Oklch::new(0.9, self.primary_chroma * 0.08, self.neutral_hue),
                destructive: Oklch::new(0.55, DESTRUCTIVE_CHROMA, DESTRUCTIVE_HUE),
                muted_foreground: self.neutral(0.40, 1.0),
            },
            Mode::Dark => Surfaces {
                background: self.neutral(0.09, 2.0),
                card: self.neutral(0.20, 0.1),
                popover: Oklch::new(0.13, self.card_saturation, self.neutral_hue),
                muted: self.neutral(0.20, 2.0),
                border: self.neutral(0.26, 0.1),
                input: self.neutral(0.4, 0.05),
                primary,
                secondary: Oklch::new(0.22, self.primary_chroma * 0.3, self.primary_hue),
                accent: Oklch::new(0.25, self.accent_chroma * 0.5, self.accent_hue),
                destructive: Oklch::new(0.45, DESTRUCTIVE_CHROMA, DESTRUCTIVE_HUE),
                muted_foreground: self.neutral(0.70, 1.0),
            },
        }
    }

    /// Derive every token for one mode.
    pub fn token_set(&self, mode: Mode) -> SemanticTokenSet {
        let s = self.surfaces(mode);
        let chart = chart_ramp(s.primary, mode);
        let fg = |background: Oklch| self.foreground_for(background);

        SemanticTokenSet::from_fn(mode, |role| match role {
            TokenRole::Background | TokenRole::Sidebar => s.background,
            TokenRole::Foreground | TokenRole::SidebarForeground => fg(s.background),
            TokenRole::Card => s.card,
            TokenRole::CardForeground => fg(s.card),
            TokenRole::Popover => s.popover,
            TokenRole::PopoverForeground => fg(s.popover),
            TokenRole::Primary | TokenRole::SidebarPrimary => s.primary,
            TokenRole::PrimaryForeground | TokenRole::SidebarPrimaryForeground => fg(s.primary),
            TokenRole::Secondary => s.secondary,
            TokenRole::SecondaryForeground => fg(s.secondary),
            TokenRole::Muted | TokenRole::SidebarAccent => s.muted,
            TokenRole::MutedForeground => s.muted_foreground,
            TokenRole::SidebarAccentForeground => fg(s.muted),
            TokenRole::Accent => s.accent,
            TokenRole::AccentForeground => fg(s.accent),
            TokenRole::Destructive => s.destructive,
            TokenRole::DestructiveForeground => Oklch::new(FOREGROUND_LIGHT_L, 0.0, 0.0),
            TokenRole::Border | TokenRole::SidebarBorder => s.border,
            TokenRole::Input => s.input,
            // Ring mirrors primary
            TokenRole::Ring | TokenRole::SidebarRing => s.primary,
            TokenRole::Chart1 => chart[0],
            TokenRole::Chart2 => chart[1],
            TokenRole::Chart3 => chart[2],
            TokenRole::Chart4 => chart[3],
            TokenRole::Chart5 => chart[4],
        })
    }
}

/// Per-mode background colors that the role table draws from.
struct Surfaces {
    background: Oklch,
    card: Oklch,
    popover: Oklch,
    muted: Oklch,
    border: Oklch,
    input: Oklch,
    primary: Oklch,
    secondary: Oklch,
    accent: Oklch,
    destructive: Oklch,
    muted_foreground: Oklch,
}

/// A complete theme for one strategy: light and dark token sets.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub strategy: Strategy,
    pub base: Oklch,
    pub light: SemanticTokenSet,
    pub dark: SemanticTokenSet,
}

impl Theme {
    pub fn mode(&self, mode: Mode) -> &SemanticTokenSet {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

/// Synthesize one strategy's theme from a parsed base color.
pub fn synthesize(base: Oklch, strategy: Strategy) -> Theme {
    let seed = ThemeSeed::new(base, strategy.config());
    Theme {
        strategy,
        base,
        light: seed.token_set(Mode::Light),
        dark: seed.token_set(Mode::Dark),
    }
}

/// All four strategies for one base color.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSet {
    themes: [Theme; 4],
}

impl ThemeSet {
    pub fn generate(base: Oklch) -> Self {
        Self {
            themes: Strategy::ALL.map(|strategy| synthesize(base, strategy)),
        }
    }

    /// Generate from color text; malformed text yields a neutral theme.
    pub fn from_css_text(text: &str) -> Self {
        Self::generate(parse_oklch(text))
    }

    pub fn get(&self, strategy: Strategy) -> &Theme {
        // ALL order matches declaration order
        &self.themes[strategy as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }
}
