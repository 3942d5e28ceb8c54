//! Five-step chart accent ramp derived from a mode's primary color.

use super::tokens::Mode;
use crate::color::Oklch;

/// Below this chroma the ramp is a pure lightness progression.
///
/// Deliberately coarser than the synthesizer's 0.012 noise floor.
pub const CHART_ACHROMATIC_THRESHOLD: f64 = 0.02;

/// No chromatic chart step drops below this chroma.
pub const CHART_MIN_CHROMA: f64 = 0.08;

pub const CHART_STEPS: usize = 5;

/// Hue rotation between consecutive steps (analogous progression).
const HUE_STEP_DEGREES: f64 = 30.0;

/// Build the ramp for `primary` as it appears in `mode`.
pub fn chart_ramp(primary: Oklch, mode: Mode) -> [Oklch; CHART_STEPS] {
    let achromatic = primary.is_achromatic(CHART_ACHROMATIC_THRESHOLD);

    std::array::from_fn(|step| {
        let i = step as f64;
        if achromatic {
            let l = match mode {
                Mode::Dark => 0.3 + i * 0.12,
                Mode::Light => 0.8 - i * 0.12,
            };
            return Oklch::new(l, 0.0, 0.0);
        }

        let (l, c) = match mode {
            // Brighter steps on dark backgrounds, each a little less saturated
            Mode::Dark => (
                0.55 + i * 0.06,
                (primary.c * (1.0 - i * 0.05)).max(CHART_MIN_CHROMA),
            ),
            Mode::Light => (0.55 - i * 0.06, primary.c.max(CHART_MIN_CHROMA)),
        };
        Oklch::new(l, c, primary.h + i * HUE_STEP_DEGREES)
    })
}
