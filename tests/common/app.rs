//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use tintforge::models::AppConfig;
use tintforge::server::{build_router, create_app_state_with_config, AppState};
use tintforge::services::PaletteCache;

/// Test application with router and direct access to services
pub struct TestApp {
    router: axum::Router,
    pub palette_cache: Arc<PaletteCache>,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application with a custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        let state = create_app_state_with_config(config).expect("Failed to create app state");
        Self::from_state(state)
    }

    /// Build the router around prepared state (same as production)
    pub fn from_state(state: AppState) -> Self {
        let palette_cache = state.palette_cache.clone();
        let router = build_router(state);

        Self {
            router,
            palette_cache,
        }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// POST a JSON document
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> TestResponse {
        self.post_raw(path, "application/json", &body.to_string())
            .await
    }

    /// POST an arbitrary body with the given content type
    pub async fn post_raw(&self, path: &str, content_type: &str, body: &str) -> TestResponse {
        let request = Request::post(path)
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body.to_owned()))
            .unwrap();
        self.request(request).await
    }

    /// Drive one request through a clone of the router and buffer the reply
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let (parts, body) = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
            .into_parts();
        let body = body
            .collect()
            .await
            .expect("response body readable")
            .to_bytes()
            .to_vec();

        TestResponse {
            status: parts.status,
            headers: parts.headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Body decoded as (lossy) UTF-8
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Content-Type header, if any
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE)?.to_str().ok()
    }
}
