//! Integration tests for the theme endpoints.

mod common;

use axum::http::StatusCode;
use common::fixtures::colors;
use common::{assert_json_status, assert_ok, assert_status, assert_stylesheet, TestApp};
use oklch_theme::{parse_oklch, synthesize, Oklch, Strategy, ThemeSet};
use pretty_assertions::assert_eq;
use serde_json::json;
use tintforge::models::AppConfig;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.get("/health").await;
    assert_ok(&response);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_themes_for_base_color() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/themes", &json!({ "color": colors::BLUE }))
        .await;
    assert_ok(&response);
    let json: serde_json::Value = response.json();

    assert_eq!(json["base"], colors::BLUE);
    let expected = ThemeSet::from_css_text(colors::BLUE);
    for strategy in Strategy::ALL {
        let css = json[strategy.name()].as_str().unwrap();
        assert_stylesheet(css, ".dark");
        assert_eq!(css, expected.get(strategy).to_css());
    }

    let standard = json["standard"].as_str().unwrap();
    assert!(standard.contains("  --primary: oklch(0.550 0.140 260.000);\n"));
    let minimal = json["minimal"].as_str().unwrap();
    assert!(minimal.contains("  --primary: oklch(0.650 0.084 260.000);\n"));
}

#[tokio::test]
async fn test_themes_malformed_color_is_neutral() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/themes", &json!({ "color": "not-a-color" }))
        .await;
    assert_ok(&response);
    let json: serde_json::Value = response.json();

    assert_eq!(json["base"], colors::NEUTRAL);
    assert_stylesheet(json["vivid"].as_str().unwrap(), ".dark");
}

#[tokio::test]
async fn test_themes_accept_hex() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/themes", &json!({ "color": "#3366ff" }))
        .await;
    let json: serde_json::Value = response.json();

    assert_eq!(json["base"], Oklch::from_rgb8(0x33, 0x66, 0xff).to_string());
}

#[tokio::test]
async fn test_themes_gray_base_has_gray_accent() {
    let app = TestApp::new();

    let json: serde_json::Value = app
        .post_json("/api/themes", &json!({ "color": colors::GRAY }))
        .await
        .json();

    for strategy in Strategy::ALL {
        let css = json[strategy.name()].as_str().unwrap();
        let accents: Vec<&str> = css
            .lines()
            .filter(|line| line.starts_with("  --accent: "))
            .collect();
        assert_eq!(accents.len(), 2);
        for line in accents {
            assert!(
                line.ends_with(" 0.000 0.000);"),
                "{strategy}: accent not gray: {line}"
            );
        }
    }
}

#[tokio::test]
async fn test_theme_css_endpoint() {
    let app = TestApp::new();

    let response = app
        .get("/api/themes/vivid?color=oklch(0.55%200.14%20260)")
        .await;
    assert_ok(&response);
    assert_eq!(response.content_type(), Some("text/css; charset=utf-8"));

    let expected = synthesize(parse_oklch(colors::BLUE), Strategy::Vivid).to_css();
    assert_eq!(response.text(), expected);
}

#[tokio::test]
async fn test_theme_css_strategy_is_case_insensitive() {
    let app = TestApp::new();

    let response = app.get("/api/themes/MINIMAL?color=%23336699").await;
    assert_ok(&response);
    assert_stylesheet(&response.text(), ".dark");
}

#[tokio::test]
async fn test_theme_css_defaults_to_fallback_color() {
    let app = TestApp::new();

    let response = app.get("/api/themes/professional").await;
    assert_ok(&response);

    let expected = synthesize(parse_oklch(colors::FALLBACK), Strategy::Professional).to_css();
    assert_eq!(response.text(), expected);
}

#[tokio::test]
async fn test_theme_css_unknown_strategy() {
    let app = TestApp::new();

    let response = app.get("/api/themes/neon?color=%23ff0000").await;
    assert_status(&response, StatusCode::NOT_FOUND);
    assert_json_status(&response, 404);

    let json: serde_json::Value = response.json();
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("unknown theme strategy \"neon\""));
}

#[tokio::test]
async fn test_theme_css_uses_configured_options() {
    let mut config = AppConfig::default();
    config.themes.radius = "0.75rem".to_string();
    config.themes.dark_selector = "[data-theme=\"dark\"]".to_string();
    let app = TestApp::with_config(config);

    let response = app.get("/api/themes/standard").await;
    assert_ok(&response);
    let css = response.text();

    assert_stylesheet(&css, "[data-theme=\"dark\"]");
    assert!(css.contains("  --radius: 0.75rem;\n"));
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new();
    let response = app.get("/api/unknown").await;
    assert_status(&response, StatusCode::NOT_FOUND);
}
