//! バックエンドAPIの契約
//!
//! 検索・検出・栄養情報の3サービスはいずれもJSON over HTTP。
//! `status: "success"` 以外の応答はすべて失敗として扱う。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

pub const SEARCH_PATH: &str = "/api/search";
pub const START_DETECTION_PATH: &str = "/api/start-detection";
pub const STOP_DETECTION_PATH: &str = "/api/stop-detection";
pub const DETECTION_RESULTS_PATH: &str = "/api/detection-results";
pub const NUTRITION_PATH: &str = "/api/get-nutrition";

pub const STATUS_SUCCESS: &str = "success";

/// 検索リクエスト
#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
}

/// 栄養情報リクエスト
#[derive(Debug, Serialize)]
pub struct NutritionRequest<'a> {
    pub food_item: &'a str,
}

/// start/stop-detection の応答
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: None,
        }
    }

    pub fn failure(status: &str, message: &str) -> Self {
        Self {
            status: status.to_string(),
            message: Some(message.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// 検索結果の1件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSummary {
    pub collection: String,
    pub summary: String,
}

/// 検索の応答
///
/// `summaries` は形式が崩れていても応答全体を失敗にしないため、生のJSONで保持する
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summaries: Option<Value>,
}

impl SearchResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// 検索結果を取り出す
    ///
    /// # Returns
    /// * `Some(Vec)` - 配列で、全要素が `{collection, summary}` の場合
    /// * `None` - 欠落・配列以外・要素の形式不正
    pub fn summaries(&self) -> Option<Vec<SearchSummary>> {
        let items = self.summaries.as_ref()?.as_array()?;
        items
            .iter()
            .map(|item| serde_json::from_value(item.clone()).ok())
            .collect()
    }
}

/// detection-results の応答
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionResultsResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Value>,
}

impl DetectionResultsResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// 検出結果の食品ラベルを出現順に取り出す
    ///
    /// `food` が無い・空文字の要素は読み飛ばす（timestamp等の他フィールドは無視）
    pub fn food_labels(&self) -> Vec<String> {
        let Some(items) = self.results.as_ref().and_then(Value::as_array) else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|item| item.get("food")?.as_str())
            .map(str::trim)
            .filter(|food| !food.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// get-nutrition の応答
///
/// `nutrition_info` は文字列のこともオブジェクトのこともある
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition_info: Option<Value>,
}

impl NutritionResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// 成功かつ中身のある栄養情報
    pub fn info(&self) -> Option<&Value> {
        if !self.is_success() {
            return None;
        }
        match self.nutrition_info.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            value => Some(value),
        }
    }
}

/// サービスごとのベースURL
///
/// 空文字は同一オリジンへの相対パスを意味する（Web版の既定）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub search: String,
    pub detection: String,
    pub nutrition: String,
}

impl Endpoints {
    /// ローカル開発用（検索・検出は5000番、栄養情報は5001番）
    pub fn local() -> Self {
        Self {
            search: "http://localhost:5000".into(),
            detection: "http://localhost:5000".into(),
            nutrition: "http://localhost:5001".into(),
        }
    }

    pub fn search_url(&self) -> String {
        join_url(&self.search, SEARCH_PATH)
    }

    pub fn start_detection_url(&self) -> String {
        join_url(&self.detection, START_DETECTION_PATH)
    }

    pub fn stop_detection_url(&self) -> String {
        join_url(&self.detection, STOP_DETECTION_PATH)
    }

    pub fn detection_results_url(&self) -> String {
        join_url(&self.detection, DETECTION_RESULTS_PATH)
    }

    pub fn nutrition_url(&self) -> String {
        join_url(&self.nutrition, NUTRITION_PATH)
    }
}

/// ベースURLとパスを連結（スラッシュの重複を避ける）
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// バックエンド呼び出しの抽象
///
/// CLI（reqwest）とWeb（fetch）でそれぞれ実装する。
/// 非`Send`のfutureを許すため、シングルスレッド前提で使う
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// `POST /api/search`
    async fn search(&self, query: &str) -> Result<SearchResponse>;

    /// `POST /api/start-detection`
    async fn start_detection(&self) -> Result<StatusResponse>;

    /// `POST /api/stop-detection`
    async fn stop_detection(&self) -> Result<StatusResponse>;

    /// `GET /api/detection-results`
    async fn detection_results(&self) -> Result<DetectionResultsResponse>;

    /// `POST /api/get-nutrition`
    async fn nutrition(&self, food_item: &str) -> Result<NutritionResponse>;
}
