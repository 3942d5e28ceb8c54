//! Linear RGB color type
//!
//! Linear RGB is proportional to physical light intensity. The OKLab matrices
//! are defined against it, so every pixel is gamma-decoded before projection.

use super::lut::srgb8_to_linear;
use super::srgb::Srgb;

/// A color in linear RGB color space.
///
/// Values are typically in the range 0.0..=1.0, but colors converted back
/// from OKLab may fall outside it when they are out of the sRGB gamut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Decode 8-bit sRGB channels through the compile-time gamma table.
    #[inline]
    pub fn from_srgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: srgb8_to_linear(r),
            g: srgb8_to_linear(g),
            b: srgb8_to_linear(b),
        }
    }
}

/// IEC 61966-2-1 decode: sRGB to linear light
fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

impl From<Srgb> for LinearRgb {
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_and_formula_agree() {
        for i in 0..=255u8 {
            let from_table = LinearRgb::from_srgb8(i, i, i);
            let from_formula = LinearRgb::from(Srgb::from_u8(i, i, i));
            assert!((from_table.r - from_formula.r).abs() < 1e-12);
        }
    }

    #[test]
    fn test_mid_gray() {
        // Exact: ((0.5 + 0.055) / 1.055)^2.4 = 0.214041...
        let linear = LinearRgb::from(Srgb::new(0.5, 0.5, 0.5));
        assert!((linear.r - 0.214).abs() < 0.001, "got {}", linear.r);
    }
}
