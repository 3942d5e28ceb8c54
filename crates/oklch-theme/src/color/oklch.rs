//! Oklch, the polar form of Oklab, and its `oklch(L C H)` text form.
//!
//! - **L** (Lightness): Same as Oklab L
//! - **C** (Chroma): distance from the neutral axis, `hypot(a, b)`
//! - **H** (Hue): angle of `(a, b)` in degrees, normalized to `[0, 360)`
//!
//! Every theme token is computed here, so the CSS serialization rules (three
//! decimals, chroma cap) live on this type.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use super::linear_rgb::LinearRgb;
use super::oklab::Oklab;
use super::srgb::Srgb;
use crate::error::ParseColorError;

/// Highest chroma ever written to a stylesheet.
pub const MAX_CHROMA: f64 = 0.35;

/// An OKLCH color (lightness, chroma, hue in degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white)
    pub l: f64,
    /// Chroma: 0.0 is gray, rarely above 0.4
    pub c: f64,
    /// Hue angle in degrees, `[0, 360)`
    pub h: f64,
}

impl Oklch {
    /// Substitute for unparseable color text.
    pub const NEUTRAL: Oklch = Oklch {
        l: 0.5,
        c: 0.1,
        h: 0.0,
    };

    /// Create a color, normalizing the hue into `[0, 360)`.
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l,
            c,
            h: normalize_hue(h),
        }
    }

    /// Convert an 8-bit sRGB pixel.
    ///
    /// ```
    /// use oklch_theme::Oklch;
    ///
    /// let white = Oklch::from_rgb8(255, 255, 255);
    /// assert!((white.l - 1.0).abs() < 1e-6);
    /// assert!(white.c < 1e-6);
    /// ```
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Oklab::from(LinearRgb::from_srgb8(r, g, b)).into()
    }

    /// True when chroma is below `threshold`.
    #[inline]
    pub fn is_achromatic(&self, threshold: f64) -> bool {
        self.c < threshold
    }

    /// Convert back to gamma-encoded sRGB (unclamped; out-of-gamut colors
    /// are clipped by [`Srgb::to_bytes`]).
    pub fn to_srgb(self) -> Srgb {
        Srgb::from(LinearRgb::from(Oklab::from(self)))
    }

    /// Serialize as `oklch(L C H)`.
    ///
    /// ```
    /// use oklch_theme::Oklch;
    ///
    /// assert_eq!(Oklch::new(0.55, 0.14, 260.0).to_css(), "oklch(0.550 0.140 260.000)");
    /// // Chroma is capped when written out
    /// assert_eq!(Oklch::new(0.6, 0.5, 30.0).to_css(), "oklch(0.600 0.350 30.000)");
    /// ```
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

/// Wrap a hue angle into `[0, 360)`. Non-finite input becomes 0.
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if h >= 360.0 || h == 0.0 {
        0.0
    } else {
        h
    }
}

/// Clamp `value` into `[min, max]`.
#[inline]
pub fn clamp_range(min: f64, max: f64, value: f64) -> f64 {
    value.max(min).min(max)
}

/// Round to three decimals without producing a negative zero.
fn round3(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// The hue exactly as [`Display`](fmt::Display) writes it: three decimals,
/// with 360.000 wrapped to 0.
pub fn serialized_hue(h: f64) -> f64 {
    let h = round3(h);
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let l = round3(self.l);
        let c = round3(self.c.min(MAX_CHROMA));
        let h = serialized_hue(self.h);
        write!(f, "oklch({l:.3} {c:.3} {h:.3})")
    }
}

fn oklch_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"oklch\(([\d.]+)\s+([\d.]+)\s+([\d.]+)\)").expect("oklch pattern is valid")
    })
}

impl FromStr for Oklch {
    type Err = ParseColorError;

    /// Strict parse of the first `oklch(L C H)` expression in `s`.
    ///
    /// Components must be unsigned decimal numbers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = oklch_pattern()
            .captures(s)
            .ok_or_else(|| ParseColorError::NotOklch(s.to_string()))?;

        let l: f64 = caps[1].parse()?;
        let c: f64 = caps[2].parse()?;
        let h: f64 = caps[3].parse()?;
        Ok(Self::new(l, c, h))
    }
}

/// Soft parse: malformed text yields [`Oklch::NEUTRAL`] instead of an error.
///
/// ```
/// use oklch_theme::{parse_oklch, Oklch};
///
/// assert_eq!(parse_oklch("not-a-color"), Oklch::NEUTRAL);
/// assert_eq!(parse_oklch("oklch(0.7 0.1 200)"), Oklch::new(0.7, 0.1, 200.0));
/// ```
pub fn parse_oklch(text: &str) -> Oklch {
    text.parse().unwrap_or(Oklch::NEUTRAL)
}

impl From<Oklab> for Oklch {
    /// Cartesian to polar. `atan2(0, 0)` is 0, so grays get hue 0.
    fn from(lab: Oklab) -> Self {
        let c = lab.a.hypot(lab.b);
        let h = lab.b.atan2(lab.a).to_degrees();
        Self::new(lab.l, c, h)
    }
}

impl From<Oklch> for Oklab {
    fn from(lch: Oklch) -> Self {
        let h = lch.h.to_radians();
        Self::new(lch.l, lch.c * h.cos(), lch.c * h.sin())
    }
}

impl From<Srgb> for Oklch {
    fn from(srgb: Srgb) -> Self {
        Oklab::from(LinearRgb::from(srgb)).into()
    }
}
