//! チャットメッセージの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Origin: 発言者（ユーザー/アシスタント）
//! - Payload: バックエンドから受け取った生の内容（テキスト or 構造化データ）
//! - ChatEntry: メッセージログの1件
//! - RenderableContent: フォーマッタの出力（表示用）

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::formatter;

/// 発言者
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Assistant,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::User => "user",
            Origin::Assistant => "assistant",
        }
    }
}

/// メッセージの生データ
///
/// 表示形式への変換はレンダリング時にフォーマッタで行う
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    Text(String),
    Structured(serde_json::Value),
}

impl Payload {
    /// JSON値から生成（文字列はテキストとして扱う）
    pub fn from_value(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Payload::Text(s),
            other => Payload::Structured(other),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(s) => Some(s),
            Payload::Structured(_) => None,
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        Payload::from_value(value)
    }
}

/// メッセージログの1件（生成後は不変）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatEntry {
    origin: Origin,
    content: Payload,
}

impl ChatEntry {
    pub fn new(origin: Origin, content: impl Into<Payload>) -> Self {
        Self {
            origin,
            content: content.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Origin::User, Payload::Text(text.into()))
    }

    pub fn assistant(content: impl Into<Payload>) -> Self {
        Self::new(Origin::Assistant, content)
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn content(&self) -> &Payload {
        &self.content
    }

    pub fn is_user(&self) -> bool {
        self.origin == Origin::User
    }

    /// 表示用に整形
    pub fn render(&self) -> RenderableContent {
        formatter::format(&self.content)
    }
}

/// ラベル付きリストの1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledItem {
    pub label: String,
    pub value: String,
}

impl LabeledItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for LabeledItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}", self.label)
        } else {
            write!(f, "{}: {}", self.label, self.value)
        }
    }
}

/// フォーマッタの出力
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderableContent {
    Text(String),
    List(Vec<LabeledItem>),
}

impl RenderableContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RenderableContent::Text(s) => Some(s),
            RenderableContent::List(_) => None,
        }
    }

    pub fn items(&self) -> &[LabeledItem] {
        match self {
            RenderableContent::Text(_) => &[],
            RenderableContent::List(items) => items,
        }
    }
}

impl fmt::Display for RenderableContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderableContent::Text(text) => write!(f, "{}", text),
            RenderableContent::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}
