//! Test fixtures and constants.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

/// Base colors used across tests
pub mod colors {
    /// Medium blue, also the extraction fallback
    pub const BLUE: &str = "oklch(0.550 0.140 260.000)";

    /// Nearly gray; below the achromatic threshold
    pub const GRAY: &str = "oklch(0.600 0.005 200.000)";

    /// Fallback palette entry as serialized by the API
    pub const FALLBACK: &str = "oklch(0.550 0.140 260.000)";

    /// Parsed from malformed input
    pub const NEUTRAL: &str = "oklch(0.500 0.100 0.000)";
}

/// Stripe colors of [`tricolor_png`], most prominent first
pub const RED: [u8; 3] = [220, 40, 40];
pub const BLUE_RGB: [u8; 3] = [40, 60, 250];
pub const GREEN: [u8; 3] = [40, 180, 60];

/// Encode an image in the given format
pub fn encode(image: impl Into<DynamicImage>, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    image
        .into()
        .write_to(&mut out, format)
        .expect("Failed to encode image");
    out.into_inner()
}

/// Vertical stripes, one per color, `width` columns each
pub fn striped_image(stripes: &[([u8; 3], u32)]) -> RgbImage {
    let total: u32 = stripes.iter().map(|(_, w)| w).sum();
    RgbImage::from_fn(total, 8, |x, _| {
        let mut edge = 0;
        for (color, width) in stripes {
            edge += width;
            if x < edge {
                return Rgb(*color);
            }
        }
        Rgb([0, 0, 0])
    })
}

/// Red / blue / green PNG covering 60% / 30% / 10%
pub fn tricolor_png() -> Vec<u8> {
    encode(
        striped_image(&[(RED, 6), (BLUE_RGB, 3), (GREEN, 1)]),
        ImageFormat::Png,
    )
}

/// A fully transparent PNG (no usable pixels)
pub fn transparent_png() -> Vec<u8> {
    encode(
        RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 0])),
        ImageFormat::Png,
    )
}

/// `oklch(...)` text of an 8-bit color, as the extractor reports it
pub fn oklch_text(rgb: [u8; 3]) -> String {
    oklch_theme::Oklch::from_rgb8(rgb[0], rgb[1], rgb[2]).to_string()
}
