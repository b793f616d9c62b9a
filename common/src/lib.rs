//! NutriScan Common Library
//!
//! CLIとWeb(WASM)で共有されるチャットのオーケストレーション層
//!
//! - メッセージログ（追記専用）
//! - ペイロードフォーマッタ
//! - スキャンワークフローの状態機械
//! - 検索・検出・栄養情報の3バックエンドをまとめるオーケストレータ

pub mod types;
pub mod error;
pub mod api;
pub mod detection;
pub mod formatter;
pub mod message_log;
pub mod messages;
pub mod orchestrator;
pub mod workflow;

pub use types::{ChatEntry, LabeledItem, Origin, Payload, RenderableContent};
pub use error::{Error, Result};
pub use api::{
    Backend, DetectionResultsResponse, Endpoints, NutritionResponse, SearchResponse,
    SearchSummary, StatusResponse,
};
pub use detection::DetectionResultSet;
pub use formatter::{format, format_text, format_value};
pub use message_log::MessageLog;
pub use orchestrator::{Orchestrator, Session};
pub use workflow::{ScanPhase, Workflow};
