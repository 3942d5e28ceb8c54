//! Gamma lookup table access
//!
//! Pixel input is always 8-bit, so the sRGB decode is a straight table lookup
//! into a 256-entry table generated at compile time by build.rs.

// Include the generated LUT from build.rs
include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Decode one 8-bit sRGB channel to linear light.
#[inline]
pub fn srgb8_to_linear(value: u8) -> f64 {
    SRGB8_TO_LINEAR[value as usize]
}
