//! 設定ファイルのテスト

use nutriscan::config::{Config, ENV_DETECTION_URL, ENV_NUTRITION_URL, ENV_SEARCH_URL};
use nutriscan_common::Endpoints;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.endpoints, Endpoints::local());
    assert_eq!(config.timeout_seconds, 30);
    assert!(config.welcome);
    assert_eq!(config.timeout(), Duration::from_secs(30));
}

#[test]
fn test_load_missing_file_returns_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_search_url("http://search.local:8080/".to_string()).unwrap();
    config.timeout_seconds = 5;
    config.welcome = false;
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.endpoints.search, "http://search.local:8080");
    assert_eq!(loaded.timeout_seconds, 5);
    assert!(!loaded.welcome);
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"timeout_seconds": 10}"#).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.timeout_seconds, 10);
    assert_eq!(loaded.endpoints, Endpoints::local());
    assert!(loaded.welcome);
}

#[test]
fn test_invalid_file_is_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_overrides_take_priority() {
    let mut config = Config::default();
    config.apply_overrides(|key| match key {
        k if k == ENV_SEARCH_URL => Some("http://search:9000".to_string()),
        k if k == ENV_NUTRITION_URL => Some("   ".to_string()),
        _ => None,
    });

    assert_eq!(config.endpoints.search, "http://search:9000");
    // 空白のみは無視
    assert_eq!(config.endpoints.nutrition, Endpoints::local().nutrition);
    assert_eq!(config.endpoints.detection, Endpoints::local().detection);
}

#[test]
fn test_detection_override() {
    let mut config = Config::default();
    config.apply_overrides(|key| (key == ENV_DETECTION_URL).then(|| "http://camera:7000".to_string()));
    assert_eq!(config.endpoints.detection, "http://camera:7000");
}

#[test]
fn test_set_url_rejects_missing_scheme() {
    let mut config = Config::default();
    assert!(config.set_nutrition_url("localhost:5001".to_string()).is_err());
    assert_eq!(config.endpoints.nutrition, Endpoints::local().nutrition);
}

#[test]
fn test_zero_timeout_is_clamped() {
    let config = Config {
        timeout_seconds: 0,
        ..Config::default()
    };
    assert_eq!(config.timeout(), Duration::from_secs(1));
}
