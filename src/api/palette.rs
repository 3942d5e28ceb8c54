use axum::{extract::State, response::Json, Json as JsonExtractor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::services::{CachedPalette, ImageRef, PaletteCache, PaletteExtractor};

/// Request body for palette extraction
#[derive(Debug, Deserialize, ToSchema)]
pub struct PaletteRequest {
    /// Image URL: `http(s)://...` or `data:<mime>;base64,<payload>`
    pub source: String,
}

/// Extracted palette
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaletteResponse {
    /// Up to five `oklch(L C H)` colors, most prominent first
    pub colors: Vec<String>,
    /// Whether the palette was served from the cache
    pub cached: bool,
    /// When the palette was extracted
    pub extracted_at: DateTime<Utc>,
}

impl PaletteResponse {
    fn new(entry: &CachedPalette, cached: bool) -> Self {
        Self {
            colors: entry.palette.to_css_strings(),
            cached,
            extracted_at: entry.extracted_at,
        }
    }
}

/// Extract a palette from an image
///
/// Never fails on image problems: unreachable, oversized or undecodable
/// images yield the single fallback color `oklch(0.550 0.140 260.000)`.
/// Fallback results are not cached.
#[utoipa::path(
    post,
    path = "/api/palette",
    request_body = PaletteRequest,
    responses(
        (status = 200, description = "Palette extracted (or fallback)", body = PaletteResponse),
    ),
    tag = "Palette"
)]
pub async fn handle_palette(
    State(extractor): State<Arc<PaletteExtractor>>,
    State(cache): State<Arc<PaletteCache>>,
    JsonExtractor(request): JsonExtractor<PaletteRequest>,
) -> Json<PaletteResponse> {
    if let Some(hit) = cache.get(&request.source) {
        return Json(PaletteResponse::new(&hit, true));
    }

    let source = ImageRef::Url(request.source);
    let outcome = extractor.extract_outcome(&source).await;
    let entry = CachedPalette {
        palette: outcome.palette,
        extracted_at: Utc::now(),
    };
    if !outcome.is_fallback {
        if let Some(url) = source.url() {
            cache.store(url, entry.clone());
        }
    }

    Json(PaletteResponse::new(&entry, false))
}
