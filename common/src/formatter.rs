//! ペイロードフォーマッタ
//!
//! バックエンドの応答は形式がバラバラ（平文、改行区切りの key: value、JSONオブジェクト）なので、
//! 表示前に「テキスト」か「ラベル付きリスト」のどちらかに正規化する。
//!
//! 判定順序:
//! 1. 構造化データ（オブジェクト）→ key: value リスト
//! 2. テキストがJSONオブジェクトとしてパースできる → 1と同じ
//! 3. コロンと改行を含む複数行テキスト → 各行を最初のコロンで分割
//! 4. それ以外 → テキストのまま
//!
//! 失敗することはなく、どの判定にも当てはまらなければ元のテキストを返す。

use serde_json::{Map, Value};

use crate::types::{LabeledItem, Payload, RenderableContent};

/// テキスト用の判定器（先頭から順に試す）
type Detector = fn(&str) -> Option<RenderableContent>;

const TEXT_DETECTORS: &[Detector] = &[detect_json_mapping, detect_key_value_lines];

/// 生データを表示形式に変換
///
/// # Arguments
/// * `raw` - チャットログに格納された生データ
///
/// # Returns
/// 表示用の内容（失敗しない）
pub fn format(raw: &Payload) -> RenderableContent {
    match raw {
        Payload::Text(text) => format_text(text),
        Payload::Structured(value) => format_value(value),
    }
}

/// JSON値を表示形式に変換
pub fn format_value(value: &Value) -> RenderableContent {
    match value {
        Value::Object(map) if !map.is_empty() => RenderableContent::List(labeled_pairs(map)),
        Value::String(text) => format_text(text),
        // 配列・数値などはテキスト判定にかけず、そのまま表示
        other => RenderableContent::Text(other.to_string()),
    }
}

/// テキストを表示形式に変換
pub fn format_text(text: &str) -> RenderableContent {
    TEXT_DETECTORS
        .iter()
        .find_map(|detect| detect(text))
        .unwrap_or_else(|| RenderableContent::Text(text.to_string()))
}

/// オブジェクトを key: value のリストに変換（挿入順を維持）
fn labeled_pairs(map: &Map<String, Value>) -> Vec<LabeledItem> {
    map.iter()
        .map(|(key, value)| LabeledItem::new(key.as_str(), value_text(value)))
        .collect()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JSONオブジェクト文字列の判定
fn detect_json_mapping(text: &str) -> Option<RenderableContent> {
    let trimmed = text.trim();
    if !trimmed.starts_with('{') {
        return None;
    }
    let value: Value = serde_json::from_str(trimmed).ok()?;
    match value {
        Value::Object(map) if !map.is_empty() => Some(RenderableContent::List(labeled_pairs(&map))),
        _ => None,
    }
}

/// 改行区切りの key: value テキストの判定
///
/// 実改行を含むことが条件。分割時は2文字のエスケープ（`\n`）も改行として扱う
fn detect_key_value_lines(text: &str) -> Option<RenderableContent> {
    if !text.contains(':') || !text.contains('\n') {
        return None;
    }

    let normalized = text.replace("\\n", "\n");
    let lines: Vec<&str> = normalized
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return None;
    }

    Some(RenderableContent::List(
        lines.into_iter().map(split_label).collect(),
    ))
}

/// 最初のコロンでラベルと値に分割（値側のコロンは保持）
fn split_label(line: &str) -> LabeledItem {
    match line.split_once(':') {
        Some((label, value)) => LabeledItem::new(label.trim(), value.trim()),
        None => LabeledItem::new(line, ""),
    }
}
