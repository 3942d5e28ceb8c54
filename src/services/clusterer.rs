//! Dominant-color clustering over decoded pixels.
//!
//! Pixels are sampled on an even stride and filtered by alpha, then grouped
//! with k-means in CIE Lab (`kmeans_colors`, fixed seed). Images with no more
//! distinct colors than `cluster_count` skip k-means and report each color
//! exactly. The result depends only on the pixels and the options.

use image::DynamicImage;
use kmeans_colors::get_kmeans;
use oklch_theme::ColorCluster;
use palette::{IntoColor, Lab, LinSrgb, Srgb};
use std::collections::BTreeMap;

use crate::models::ExtractionConfig;

/// Seed for k-means++ initialization; fixed so extraction is repeatable.
const KMEANS_SEED: u64 = 0;
const KMEANS_MAX_ITER: usize = 20;
const KMEANS_CONVERGE: f32 = 0.0025;

/// `kmeans_colors` stores cluster indices as `u8`.
const MAX_CLUSTERS: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterOptions {
    /// Upper bound on pixels examined
    pub sample_pixels: usize,
    /// Number of k-means clusters
    pub cluster_count: usize,
    /// Pixels with alpha below this are skipped
    pub min_alpha: u8,
}

impl From<&ExtractionConfig> for ClusterOptions {
    fn from(config: &ExtractionConfig) -> Self {
        Self {
            sample_pixels: config.sample_pixels,
            cluster_count: config.cluster_count,
            min_alpha: config.min_alpha,
        }
    }
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self::from(&ExtractionConfig::default())
    }
}

fn to_lab([r, g, b]: [u8; 3]) -> Lab {
    let linear: LinSrgb = Srgb::new(r, g, b).into_format::<f32>().into_linear();
    linear.into_color()
}

fn to_rgb8(lab: Lab) -> [u8; 3] {
    let linear: LinSrgb = lab.into_color();
    let rgb: Srgb = Srgb::from_linear(linear);
    [rgb.red, rgb.green, rgb.blue].map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Opaque-enough pixels on an even stride, at most `sample_pixels` of them.
fn sample(image: &DynamicImage, options: &ClusterOptions) -> Vec<[u8; 3]> {
    let rgba = image.to_rgba8();
    let total = rgba.width() as usize * rgba.height() as usize;
    if total == 0 {
        return Vec::new();
    }
    let stride = total.div_ceil(options.sample_pixels.max(1)).max(1);

    rgba.pixels()
        .step_by(stride)
        .filter(|pixel| pixel.0[3] >= options.min_alpha)
        .map(|pixel| [pixel.0[0], pixel.0[1], pixel.0[2]])
        .collect()
}

/// Cluster an image's pixels. Returns an empty list when no pixel passes
/// the alpha filter (or the image has no pixels).
pub fn cluster_pixels(image: &DynamicImage, options: &ClusterOptions) -> Vec<ColorCluster> {
    let pixels = sample(image, options);
    if pixels.is_empty() {
        return Vec::new();
    }
    let sampled = pixels.len() as f64;

    let mut distinct: BTreeMap<[u8; 3], usize> = BTreeMap::new();
    for pixel in &pixels {
        *distinct.entry(*pixel).or_default() += 1;
    }

    let k = options.cluster_count.clamp(1, MAX_CLUSTERS);
    if distinct.len() <= k {
        return distinct
            .into_iter()
            .map(|([r, g, b], count)| ColorCluster::new(r, g, b, count as f64 / sampled))
            .collect();
    }

    let lab: Vec<Lab> = pixels.into_iter().map(to_lab).collect();
    let result = get_kmeans(k, KMEANS_MAX_ITER, KMEANS_CONVERGE, false, &lab, KMEANS_SEED);

    let mut counts = vec![0usize; result.centroids.len()];
    for &index in &result.indices {
        counts[usize::from(index)] += 1;
    }

    result
        .centroids
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(centroid, count)| {
            let [r, g, b] = to_rgb8(centroid);
            ColorCluster::new(r, g, b, count as f64 / sampled)
        })
        .collect()
}
