pub mod clusterer;
pub mod extractor;
pub mod image_source;
pub mod palette_cache;
pub mod theme_service;

pub use clusterer::{cluster_pixels, ClusterOptions};
pub use extractor::{ClusterSource, Extraction, ImageClusterSource, PaletteExtractor};
pub use image_source::{ImageLoader, ImageRef};
pub use palette_cache::{CachedPalette, PaletteCache};
pub use theme_service::{parse_base_color, ThemeService};
