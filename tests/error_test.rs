//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use nutriscan::config::validate_base_url;
use nutriscan::error::NutriScanError;

/// NutriScanErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        NutriScanError::Config("テスト設定エラー".to_string()),
        NutriScanError::InvalidUrl("localhost:5000".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 不正URLのメッセージに入力値が含まれる
#[test]
fn test_invalid_url_message() {
    let err = validate_base_url("localhost:5000".to_string()).unwrap_err();
    let display = format!("{}", err);

    assert!(matches!(err, NutriScanError::InvalidUrl(_)));
    assert!(display.contains("localhost:5000"));
    assert!(display.contains("http://"));
}

/// エラーのDebug実装確認
#[test]
fn test_error_debug() {
    let err = NutriScanError::Config("テスト".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("テスト"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: NutriScanError = io_err.into();

    assert!(matches!(err, NutriScanError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: NutriScanError = json_err.into();

    assert!(matches!(err, NutriScanError::JsonParse(_)));
}

/// common::Errorからの変換
#[test]
fn test_common_error_conversion() {
    let common_err = nutriscan_common::Error::Transport("connection refused".to_string());
    let err: NutriScanError = common_err.into();

    assert!(matches!(err, NutriScanError::Common(_)));
}

/// エラーチェーン（透過的エラー）
#[test]
fn test_error_chain_transparent() {
    let common_err = nutriscan_common::Error::Http { status: 503 };
    let err: NutriScanError = common_err.into();

    // 透過的エラーなのでメッセージがそのまま表示される
    assert_eq!(format!("{}", err), "HTTP error: status 503");
}
