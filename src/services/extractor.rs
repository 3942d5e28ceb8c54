//! Palette extraction with a never-fail policy.

use async_trait::async_trait;
use oklch_theme::{ColorCluster, Palette};
use std::sync::Arc;

use super::clusterer::{cluster_pixels, ClusterOptions};
use super::image_source::{ImageLoader, ImageRef};
use crate::error::ExtractError;
use crate::models::ExtractionConfig;

/// Trait for anything that can report dominant colors of an image
#[async_trait]
pub trait ClusterSource: Send + Sync {
    /// Dominant colors with their relative areas, in any order
    async fn clusters(&self, source: &ImageRef) -> Result<Vec<ColorCluster>, ExtractError>;
}

/// Decodes images with the `image` crate and clusters them in-process
pub struct ImageClusterSource {
    loader: ImageLoader,
    options: ClusterOptions,
}

impl ImageClusterSource {
    pub fn new(loader: ImageLoader, options: ClusterOptions) -> Self {
        Self { loader, options }
    }

    pub fn from_config(config: &ExtractionConfig) -> Result<Self, ExtractError> {
        Ok(Self::new(
            ImageLoader::from_config(config)?,
            ClusterOptions::from(config),
        ))
    }
}

#[async_trait]
impl ClusterSource for ImageClusterSource {
    async fn clusters(&self, source: &ImageRef) -> Result<Vec<ColorCluster>, ExtractError> {
        let image = self.loader.load(source).await?;
        let options = self.options;
        let clusters =
            tokio::task::spawn_blocking(move || cluster_pixels(&image, &options)).await?;
        Ok(clusters)
    }
}

/// A palette plus whether it stands in for a failed extraction
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub palette: Palette,
    pub is_fallback: bool,
}

/// Turns images into ranked, hue-diverse palettes
#[derive(Clone)]
pub struct PaletteExtractor {
    source: Arc<dyn ClusterSource>,
}

impl PaletteExtractor {
    pub fn new(source: Arc<dyn ClusterSource>) -> Self {
        Self { source }
    }

    pub fn from_config(config: &ExtractionConfig) -> Result<Self, ExtractError> {
        Ok(Self::new(Arc::new(ImageClusterSource::from_config(config)?)))
    }

    /// Extract a palette, reporting failures. An image with no usable
    /// pixels is a failure too.
    pub async fn try_extract(&self, source: &ImageRef) -> Result<Palette, ExtractError> {
        let clusters = self.source.clusters(source).await?;
        let palette = Palette::from_clusters(clusters);
        if palette.is_empty() {
            return Err(ExtractError::NoColors);
        }
        tracing::info!(
            source = %source.describe(),
            colors = palette.len(),
            "Palette extracted"
        );
        Ok(palette)
    }

    /// Extract a palette, substituting [`Palette::fallback`] for any failure
    /// and saying so. Callers that cache results skip fallbacks.
    pub async fn extract_outcome(&self, source: &ImageRef) -> Extraction {
        match self.try_extract(source).await {
            Ok(palette) => Extraction {
                palette,
                is_fallback: false,
            },
            Err(e) => {
                tracing::warn!(
                    source = %source.describe(),
                    error = %e,
                    "Palette extraction failed, using fallback color"
                );
                Extraction {
                    palette: Palette::fallback(),
                    is_fallback: true,
                }
            }
        }
    }

    /// Extract a palette; any failure yields [`Palette::fallback`].
    pub async fn extract(&self, source: &ImageRef) -> Palette {
        self.extract_outcome(source).await.palette
    }
}
