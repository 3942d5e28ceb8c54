//! Color types and conversion utilities
//!
//! - **Srgb**: gamma-encoded channels, as stored in image files and hex codes
//! - **LinearRgb**: linear light, the input the OKLab matrices expect
//! - **Oklab**: perceptual Cartesian space
//! - **Oklch**: polar Oklab; every theme token is an `Oklch`
//!
//! # Example
//!
//! ```
//! use oklch_theme::{LinearRgb, Oklab, Oklch};
//!
//! // Pixel -> linear light -> Oklab -> Oklch
//! let linear = LinearRgb::from_srgb8(51, 102, 255);
//! let lch = Oklch::from(Oklab::from(linear));
//! assert_eq!(lch, Oklch::from_rgb8(51, 102, 255));
//! ```

mod linear_rgb;
mod lut;
mod oklab;
mod oklch;
mod srgb;

pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use oklch::{
    clamp_range, normalize_hue, parse_oklch, serialized_hue, Oklch, MAX_CHROMA,
};
pub use srgb::Srgb;
