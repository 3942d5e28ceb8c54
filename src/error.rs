use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use oklch_theme::UnknownStrategy;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UnknownStrategy(#[from] UnknownStrategy),
}

/// Why an image could not be turned into color clusters.
///
/// Produced by the cluster source and absorbed by the palette extractor,
/// which substitutes the fallback palette.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("HTTP {status} fetching {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Image too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },

    #[error("Unsupported image source: {0}")]
    UnsupportedSource(String),

    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("No usable pixels in image")]
    NoColors,

    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::UnknownStrategy(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_unknown_strategy() {
        let error: ApiError = UnknownStrategy("neon".to_string()).into();
        assert_eq!(
            error.to_string(),
            "unknown theme strategy \"neon\" (expected standard, vivid, minimal or professional)"
        );
    }

    #[test]
    fn test_extract_error_http_status() {
        let error = ExtractError::HttpStatus {
            status: 404,
            url: "http://localhost/a.png".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP 404 fetching http://localhost/a.png");
    }

    #[test]
    fn test_extract_error_too_large() {
        let error = ExtractError::TooLarge {
            size: 100_000,
            max: 90_000,
        };
        assert_eq!(
            error.to_string(),
            "Image too large: 100000 bytes (max 90000)"
        );
    }

    #[test]
    fn test_extract_error_unsupported_source() {
        let error = ExtractError::UnsupportedSource("ftp://host/x.png".to_string());
        assert_eq!(error.to_string(), "Unsupported image source: ftp://host/x.png");
    }

    #[test]
    fn test_extract_error_from_image_error() {
        let decode = image::load_from_memory(b"definitely not an image").unwrap_err();
        let error: ExtractError = decode.into();
        assert!(matches!(error, ExtractError::Decode(_)));
        assert!(error.to_string().starts_with("Decode error: "));
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        let response = ApiError::UnknownStrategy(UnknownStrategy("x".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
