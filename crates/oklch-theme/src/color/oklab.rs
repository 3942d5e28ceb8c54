//! Oklab perceptual color space
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::linear_rgb::LinearRgb;

/// A color in Oklab perceptual color space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 1.0 = white for in-gamut colors)
/// - `a`: Green-red opponent axis
/// - `b`: Blue-yellow opponent axis
///
/// Values are not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Oklab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

/// Linear sRGB to LMS cone response (M1, 2021-01-25 revision).
const RGB_TO_LMS: [[f64; 3]; 3] = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

/// Nonlinear LMS to Lab (M2).
const LMS_TO_LAB: [[f64; 3]; 3] = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

/// Inverse of [`LMS_TO_LAB`].
const LAB_TO_LMS: [[f64; 3]; 3] = [
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
];

/// Inverse of [`RGB_TO_LMS`].
const LMS_TO_RGB: [[f64; 3]; 3] = [
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
];

#[inline]
fn apply(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    m.map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2])
}

impl From<LinearRgb> for Oklab {
    /// M1, per-channel cube root, then M2.
    fn from(rgb: LinearRgb) -> Self {
        let lms = apply(&RGB_TO_LMS, [rgb.r, rgb.g, rgb.b]).map(f64::cbrt);
        let [l, a, b] = apply(&LMS_TO_LAB, lms);
        Oklab { l, a, b }
    }
}

impl From<Oklab> for LinearRgb {
    /// Inverse pipeline. The result is not clamped.
    fn from(lab: Oklab) -> Self {
        let lms = apply(&LAB_TO_LMS, [lab.l, lab.a, lab.b]).map(|c| c * c * c);
        let [r, g, b] = apply(&LMS_TO_RGB, lms);
        LinearRgb { r, g, b }
    }
}
