//! Image acquisition: http(s) URLs, `data:` URLs, encoded bytes and bitmaps.

use base64::Engine;
use image::DynamicImage;
use std::time::Duration;

use crate::error::ExtractError;
use crate::models::ExtractionConfig;

/// Where the pixels for a palette come from.
#[derive(Debug, Clone)]
pub enum ImageRef {
    /// `http://`, `https://` or `data:<mime>;base64,<payload>`
    Url(String),
    /// Encoded image file bytes (PNG, JPEG, GIF, WebP)
    Encoded(Vec<u8>),
    /// Already decoded pixels
    Bitmap(DynamicImage),
}

impl ImageRef {
    /// Cache key input; only URL sources are cacheable.
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageRef::Url(url) => Some(url),
            _ => None,
        }
    }

    /// Short description for log fields (data URLs can be huge).
    pub fn describe(&self) -> String {
        match self {
            ImageRef::Url(url) if url.starts_with("data:") => {
                format!("data URL ({} chars)", url.len())
            }
            ImageRef::Url(url) => url.clone(),
            ImageRef::Encoded(bytes) => format!("{} encoded bytes", bytes.len()),
            ImageRef::Bitmap(image) => format!("{}x{} bitmap", image.width(), image.height()),
        }
    }
}

/// Fetches and decodes images, enforcing the configured size limit.
#[derive(Clone)]
pub struct ImageLoader {
    client: reqwest::Client,
    max_bytes: usize,
}

impl ImageLoader {
    pub fn new(timeout: Duration, max_bytes: usize) -> Result<Self, ExtractError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tintforge/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, max_bytes })
    }

    pub fn from_config(config: &ExtractionConfig) -> Result<Self, ExtractError> {
        Self::new(config.fetch_timeout(), config.max_image_bytes)
    }

    /// Resolve `source` to decoded pixels.
    ///
    /// Decoding runs on the blocking pool.
    pub async fn load(&self, source: &ImageRef) -> Result<DynamicImage, ExtractError> {
        let bytes = match source {
            ImageRef::Bitmap(image) => return Ok(image.clone()),
            ImageRef::Encoded(bytes) => bytes.clone(),
            ImageRef::Url(url) if url.starts_with("data:") => decode_data_url(url)?,
            ImageRef::Url(url) if url.starts_with("http://") || url.starts_with("https://") => {
                self.fetch(url).await?
            }
            ImageRef::Url(other) => return Err(ExtractError::UnsupportedSource(other.clone())),
        };

        self.check_size(bytes.len())?;
        let image = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes)).await??;
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            "Decoded image"
        );
        Ok(image)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ExtractError> {
        tracing::debug!(url = %url, "Fetching image");
        let mut response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        // Reject early when the server announces an oversized body
        if let Some(length) = response.content_length() {
            self.check_size(length as usize)?;
        }

        // The announced length is optional and untrusted; count as we read
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            self.check_size(body.len() + chunk.len())?;
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }

    fn check_size(&self, size: usize) -> Result<(), ExtractError> {
        if size > self.max_bytes {
            return Err(ExtractError::TooLarge {
                size,
                max: self.max_bytes,
            });
        }
        Ok(())
    }
}

/// Decode the payload of a base64 `data:` URL.
pub fn decode_data_url(url: &str) -> Result<Vec<u8>, ExtractError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| ExtractError::InvalidDataUrl("missing data: prefix".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| ExtractError::InvalidDataUrl("missing ',' separator".to_string()))?;
    if !header.ends_with(";base64") {
        return Err(ExtractError::InvalidDataUrl(
            "only base64 payloads are supported".to_string(),
        ));
    }

    base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| ExtractError::InvalidDataUrl(e.to_string()))
}
