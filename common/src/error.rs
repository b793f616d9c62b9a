//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// バックエンド呼び出しの失敗はすべてこの型で返し、
/// オーケストレータがチャットメッセージに変換する
#[derive(Error, Debug)]
pub enum Error {
    /// 接続失敗・タイムアウトなど通信層のエラー
    #[error("Transport error: {0}")]
    Transport(String),

    /// HTTPステータスが2xx以外
    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
