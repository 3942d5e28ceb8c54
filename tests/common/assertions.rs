//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert JSON error body has expected status field
pub fn assert_json_status(response: &TestResponse, expected_status: u16) {
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected_status as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected_status,
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
}

/// Assert a palette response holds 1..=5 well-formed colors; returns them
pub fn assert_valid_palette_response(response: &TestResponse) -> Vec<String> {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    let colors: Vec<String> = json["colors"]
        .as_array()
        .expect("Expected colors array")
        .iter()
        .map(|c| c.as_str().expect("Expected color string").to_string())
        .collect();
    assert!(
        (1..=5).contains(&colors.len()),
        "Expected 1 to 5 colors, got {colors:?}"
    );
    for color in &colors {
        assert_oklch_text(color);
    }
    assert!(json["cached"].is_boolean(), "Expected cached flag");
    assert!(json["extracted_at"].is_string(), "Expected extracted_at");
    colors
}

/// Assert text is exactly `oklch(L C H)` with three decimals per component
pub fn assert_oklch_text(text: &str) {
    let inner = text
        .strip_prefix("oklch(")
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or_else(|| panic!("Not an oklch() expression: {text:?}"));
    let parts: Vec<&str> = inner.split(' ').collect();
    assert_eq!(parts.len(), 3, "Expected three components in {text:?}");
    for part in parts {
        let (_, decimals) = part
            .split_once('.')
            .unwrap_or_else(|| panic!("Missing decimals in {text:?}"));
        assert_eq!(decimals.len(), 3, "Expected 3 decimals in {text:?}");
    }
}

/// Assert a stylesheet has both mode blocks and every token
pub fn assert_stylesheet(css: &str, dark_selector: &str) {
    assert!(css.starts_with(":root {\n"), "Missing :root block: {css}");
    assert!(
        css.contains(&format!("}}\n\n{dark_selector} {{\n")),
        "Missing {dark_selector} block: {css}"
    );
    assert_eq!(css.matches("  --primary: oklch(").count(), 2);
    assert_eq!(css.matches("  --chart-5: oklch(").count(), 2);
    assert_eq!(css.matches("  --radius: ").count(), 1);
}
