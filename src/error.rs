use thiserror::Error;

#[derive(Error, Debug)]
pub enum NutriScanError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("URLが不正です: {0}（http:// または https:// で始めてください）")]
    InvalidUrl(String),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] nutriscan_common::Error),
}

pub type Result<T> = std::result::Result<T, NutriScanError>;
