//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{Path, Query, State},
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{ClusterSource, PaletteCache, PaletteExtractor, ThemeService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub extractor: Arc<PaletteExtractor>,
    pub palette_cache: Arc<PaletteCache>,
    pub themes: Arc<ThemeService>,
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    create_app_state_with_config(AppConfig::load_from_assets(&asset_loader))
}

/// Create application state from an already loaded config.
pub fn create_app_state_with_config(config: AppConfig) -> anyhow::Result<AppState> {
    let extractor = PaletteExtractor::from_config(&config.extraction)
        .map_err(|e| anyhow::anyhow!("Failed to create palette extractor: {e}"))?;
    Ok(assemble(config, extractor))
}

/// Create application state around a custom cluster source.
pub fn create_app_state_with_source(
    config: AppConfig,
    source: Arc<dyn ClusterSource>,
) -> AppState {
    assemble(config, PaletteExtractor::new(source))
}

fn assemble(config: AppConfig, extractor: PaletteExtractor) -> AppState {
    let palette_cache = Arc::new(PaletteCache::from_config(&config.extraction));
    let themes = Arc::new(ThemeService::from_config(&config.themes));

    AppState {
        config: Arc::new(config),
        extractor: Arc::new(extractor),
        palette_cache,
        themes,
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/palette", post(handle_palette))
        .route("/api/themes", post(handle_themes))
        .route("/api/themes/:strategy", get(handle_theme_css))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_palette(
    State(state): State<AppState>,
    body: axum::Json<api::PaletteRequest>,
) -> Json<api::PaletteResponse> {
    api::handle_palette(State(state.extractor), State(state.palette_cache), body).await
}

async fn handle_themes(
    State(state): State<AppState>,
    body: axum::Json<api::ThemesRequest>,
) -> Json<api::ThemesResponse> {
    api::handle_themes(State(state.themes), body).await
}

async fn handle_theme_css(
    State(state): State<AppState>,
    path: Path<String>,
    query: Query<api::ThemeQuery>,
) -> Result<Response, ApiError> {
    api::handle_theme_css(State(state.themes), path, query).await
}
