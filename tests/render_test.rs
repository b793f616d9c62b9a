//! ターミナル表示のテスト

use nutriscan::render::{prompt_label, render_entry, TerminalView};
use nutriscan_common::api::{DetectionResultsResponse, NutritionResponse, SearchResponse, StatusResponse};
use nutriscan_common::{Backend, ChatEntry, Orchestrator, Result};
use serde_json::json;

/// 検出開始だけ成功するバックエンド
struct StartOnly;

impl Backend for StartOnly {
    async fn search(&self, _query: &str) -> Result<SearchResponse> {
        Err(nutriscan_common::Error::Transport("offline".into()))
    }

    async fn start_detection(&self) -> Result<StatusResponse> {
        Ok(StatusResponse::success())
    }

    async fn stop_detection(&self) -> Result<StatusResponse> {
        Err(nutriscan_common::Error::Transport("offline".into()))
    }

    async fn detection_results(&self) -> Result<DetectionResultsResponse> {
        Err(nutriscan_common::Error::Transport("offline".into()))
    }

    async fn nutrition(&self, _food_item: &str) -> Result<NutritionResponse> {
        Err(nutriscan_common::Error::Transport("offline".into()))
    }
}

#[test]
fn test_render_user_text() {
    assert_eq!(render_entry(&ChatEntry::user("banana")), "you> banana");
}

#[test]
fn test_render_assistant_multiline_text() {
    let entry = ChatEntry::assistant("first line\nsecond line");
    assert_eq!(render_entry(&entry), "bot> first line\n     second line");
}

#[test]
fn test_render_structured_as_bullets() {
    let entry = ChatEntry::assistant(json!({"calories": "95", "sugar": "19g"}));
    assert_eq!(render_entry(&entry), "bot>\n  - calories: 95\n  - sugar: 19g");
}

#[test]
fn test_render_key_value_text_as_bullets() {
    let entry = ChatEntry::assistant("Calories: 95\nRatio: 1:2");
    assert_eq!(render_entry(&entry), "bot>\n  - Calories: 95\n  - Ratio: 1:2");
}

#[tokio::test]
async fn test_prompt_label_follows_workflow() {
    let orchestrator = Orchestrator::new(StartOnly);
    assert_eq!(prompt_label(&orchestrator.snapshot()), "[idle] you");

    orchestrator.scan().await;
    assert_eq!(prompt_label(&orchestrator.snapshot()), "[scanning] you");

    // 停止失敗ではスキャン中のまま
    orchestrator.cancel().await;
    assert_eq!(prompt_label(&orchestrator.snapshot()), "[scanning] you");
}

#[tokio::test]
async fn test_view_prints_only_new_entries() {
    let orchestrator = Orchestrator::with_welcome(StartOnly);
    let view = TerminalView::new();

    let first = view.take_new_lines(&orchestrator.snapshot());
    assert_eq!(first.len(), 1);
    assert!(first[0].starts_with("bot> Welcome to NutriScan"));

    orchestrator.submit("apple").await;
    let second = view.take_new_lines(&orchestrator.snapshot());
    assert_eq!(
        second,
        vec!["you> apple", "bot> Searching...", "bot> Error searching. Please try again."]
    );

    assert!(view.take_new_lines(&orchestrator.snapshot()).is_empty());
}
