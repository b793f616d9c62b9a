//! チャットに表示するアシスタントの定型文

pub const WELCOME: &str = "Welcome to NutriScan! Ask me about your food.";

// 検索
pub const SEARCHING: &str = "Searching...";
pub const NO_RESULTS: &str = "No results found.";
pub const SEARCH_ERROR: &str = "Error searching. Please try again.";

// 検出開始
pub const DETECTION_STARTED: &str = "Food detection started. Press Cancel when you are done scanning.";
pub const START_FAILED: &str = "Failed to start detection.";
pub const DETECTION_CONNECT_ERROR: &str = "Error connecting to detection service.";

// 検出停止・結果取得
pub const STOP_FAILED: &str = "Failed to stop detection.";
pub const STOP_ERROR: &str = "Error stopping detection.";
pub const DETECTION_STOPPED: &str = "Detection stopped. Fetching results...";
pub const NO_ITEMS_DETECTED: &str = "No food items were detected.";
pub const RESULTS_ERROR: &str = "Error fetching detection results.";

/// 検索結果1件: `(<collection>) <summary>`
pub fn search_result(collection: &str, summary: &str) -> String {
    format!("({}) {}", collection, summary)
}

/// バックエンドが返したエラー（メッセージが無ければfallback）
pub fn backend_error(message: Option<&str>, fallback: &str) -> String {
    let message = message.map(str::trim).filter(|m| !m.is_empty()).unwrap_or(fallback);
    format!("Error: {}", message)
}

pub fn detected_items(items: &[String]) -> String {
    format!("Detected items: {}", items.join(", "))
}

pub fn nutrition_searching(food: &str) -> String {
    format!("Searching nutrition for {}...", food)
}

pub fn nutrition_not_found(food: &str) -> String {
    format!("No nutrition information found for {}.", food)
}

pub fn nutrition_error(food: &str) -> String {
    format!("Error fetching nutrition for {}.", food)
}
