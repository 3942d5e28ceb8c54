//! Palette extraction policy: cluster ranking and hue deduplication.

mod cluster;
mod palette;

pub use cluster::ColorCluster;
pub use palette::{
    hue_bucket, Palette, FALLBACK_COLOR, HUE_BUCKET_DEGREES, MAX_PALETTE_COLORS,
};
