use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Json, Response},
    Json as JsonExtractor,
};
use oklch_theme::palette::FALLBACK_COLOR;
use oklch_theme::Strategy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::services::ThemeService;

/// Request body for theme generation
#[derive(Debug, Deserialize, ToSchema)]
pub struct ThemesRequest {
    /// Base color as `oklch(L C H)` or `#rrggbb`; malformed text yields a
    /// neutral theme
    pub color: String,
}

/// Stylesheets for every strategy
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ThemesResponse {
    /// The parsed base color, serialized
    pub base: String,
    pub standard: String,
    pub vivid: String,
    pub minimal: String,
    pub professional: String,
}

/// Query parameters for the stylesheet endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct ThemeQuery {
    /// Base color; defaults to the fallback blue
    #[serde(default)]
    pub color: Option<String>,
}

/// Generate all four themes for a base color
#[utoipa::path(
    post,
    path = "/api/themes",
    request_body = ThemesRequest,
    responses(
        (status = 200, description = "Stylesheets per strategy", body = ThemesResponse),
    ),
    tag = "Themes"
)]
pub async fn handle_themes(
    State(themes): State<Arc<ThemeService>>,
    JsonExtractor(request): JsonExtractor<ThemesRequest>,
) -> Json<ThemesResponse> {
    let (base, sheets) = themes.stylesheets(&request.color);

    let mut response = ThemesResponse {
        base: base.to_string(),
        standard: String::new(),
        vivid: String::new(),
        minimal: String::new(),
        professional: String::new(),
    };
    for (strategy, css) in sheets {
        let slot = match strategy {
            Strategy::Standard => &mut response.standard,
            Strategy::Vivid => &mut response.vivid,
            Strategy::Minimal => &mut response.minimal,
            Strategy::Professional => &mut response.professional,
        };
        *slot = css;
    }

    Json(response)
}

/// Get one strategy's stylesheet
#[utoipa::path(
    get,
    path = "/api/themes/{strategy}",
    params(
        ("strategy" = String, Path, description = "standard, vivid, minimal or professional"),
        ThemeQuery,
    ),
    responses(
        (status = 200, description = "Stylesheet", content_type = "text/css", body = String),
        (status = 404, description = "Unknown strategy"),
    ),
    tag = "Themes"
)]
pub async fn handle_theme_css(
    State(themes): State<Arc<ThemeService>>,
    Path(strategy): Path<String>,
    Query(query): Query<ThemeQuery>,
) -> Result<Response, ApiError> {
    let strategy: Strategy = strategy.parse()?;
    let color = query
        .color
        .unwrap_or_else(|| FALLBACK_COLOR.to_string());

    let css = themes.stylesheet(&color, strategy);
    Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css).into_response())
}
