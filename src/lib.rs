//! Tintforge - OKLCH design-token themes from image palettes
//!
//! Image acquisition, clustering, caching, configuration and the HTTP API
//! around the `oklch-theme` core. This library exposes modules for
//! integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
