//! Candidate palette reduction.
//!
//! Clusters arrive in arbitrary order. They are ranked by covered area
//! (prominence beats saturation), converted to OKLCH, and thinned so that no
//! two survivors share a 15-degree hue bucket.

use std::collections::HashSet;

use super::cluster::ColorCluster;
use crate::color::{serialized_hue, Oklch};

/// Maximum number of candidates kept.
pub const MAX_PALETTE_COLORS: usize = 5;

/// Width of a hue bucket in degrees.
pub const HUE_BUCKET_DEGREES: f64 = 15.0;

/// Color handed out when nothing could be extracted (a medium blue).
pub const FALLBACK_COLOR: Oklch = Oklch {
    l: 0.55,
    c: 0.14,
    h: 260.0,
};

/// Bucket a hue for deduplication: `round(h / 15) * 15`.
///
/// Hues just below 360 round up to the 360 bucket, which is distinct from
/// the 0 bucket.
pub fn hue_bucket(h: f64) -> i64 {
    ((h / HUE_BUCKET_DEGREES).round() * HUE_BUCKET_DEGREES) as i64
}

/// Ordered, hue-diverse candidate colors, most prominent first.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Oklch>,
}

impl Palette {
    /// Rank, convert and deduplicate clusters.
    ///
    /// ```
    /// use oklch_theme::{ColorCluster, Palette};
    ///
    /// let palette = Palette::from_clusters(vec![
    ///     ColorCluster::new(40, 60, 250, 0.1),
    ///     ColorCluster::new(200, 30, 30, 0.6),
    ///     ColorCluster::new(205, 35, 30, 0.3),
    /// ]);
    /// // The two reds share a hue bucket; the larger one wins
    /// assert_eq!(palette.len(), 2);
    /// ```
    pub fn from_clusters(clusters: impl IntoIterator<Item = ColorCluster>) -> Self {
        let mut clusters: Vec<ColorCluster> = clusters.into_iter().collect();
        // Stable, so equal areas keep the collaborator's order
        clusters.sort_by(|a, b| b.area.total_cmp(&a.area));

        let colors = clusters
            .iter()
            .map(|c| Oklch::from_rgb8(c.red, c.green, c.blue))
            .collect();

        Self::from_ranked(colors)
    }

    /// Deduplicate colors that are already in prominence order.
    ///
    /// Buckets come from the serialized hue, so the emitted `oklch(...)`
    /// strings never share one.
    pub fn from_ranked(colors: Vec<Oklch>) -> Self {
        let mut seen = HashSet::new();
        let colors = colors
            .into_iter()
            .filter(|color| seen.insert(hue_bucket(serialized_hue(color.h))))
            .take(MAX_PALETTE_COLORS)
            .collect();
        Self { colors }
    }

    /// The single-color palette used when extraction fails.
    pub fn fallback() -> Self {
        Self {
            colors: vec![FALLBACK_COLOR],
        }
    }

    pub fn colors(&self) -> &[Oklch] {
        &self.colors
    }

    /// The most prominent candidate, the default base color.
    pub fn primary(&self) -> Option<Oklch> {
        self.colors.first().copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Serialized `oklch(...)` expressions in rank order.
    pub fn to_css_strings(&self) -> Vec<String> {
        self.colors.iter().map(Oklch::to_css).collect()
    }
}
