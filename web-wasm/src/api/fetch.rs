//! fetch APIによるバックエンド
//!
//! 3つのサービスをブラウザから直接呼ぶ。URLは既定で同一オリジンの相対パス

use nutriscan_common::api::{NutritionRequest, SearchRequest};
use nutriscan_common::{
    Backend, DetectionResultsResponse, Endpoints, Error, NutritionResponse, Result,
    SearchResponse, StatusResponse,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub struct FetchBackend {
    endpoints: Endpoints,
}

impl FetchBackend {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let (status, text) = fetch_text("GET", url, None).await.map_err(transport)?;
        decode_body(status, &text)
    }

    async fn post<T: DeserializeOwned>(&self, url: &str, body: Option<&impl Serialize>) -> Result<T> {
        let body = body.map(serde_json::to_string).transpose()?;
        let (status, text) = fetch_text("POST", url, body.as_deref())
            .await
            .map_err(transport)?;
        decode_body(status, &text)
    }
}

impl Backend for FetchBackend {
    async fn search(&self, query: &str) -> Result<SearchResponse> {
        self.post(&self.endpoints.search_url(), Some(&SearchRequest { query }))
            .await
    }

    async fn start_detection(&self) -> Result<StatusResponse> {
        self.post(&self.endpoints.start_detection_url(), None::<&()>).await
    }

    async fn stop_detection(&self) -> Result<StatusResponse> {
        self.post(&self.endpoints.stop_detection_url(), None::<&()>).await
    }

    async fn detection_results(&self) -> Result<DetectionResultsResponse> {
        self.get(&self.endpoints.detection_results_url()).await
    }

    async fn nutrition(&self, food_item: &str) -> Result<NutritionResponse> {
        self.post(&self.endpoints.nutrition_url(), Some(&NutritionRequest { food_item }))
            .await
    }
}

/// fetch呼び出し（共通処理）
///
/// # Returns
/// (HTTPステータス, レスポンス本文)
async fn fetch_text(method: &str, url: &str, body: Option<&str>) -> std::result::Result<(u16, String), JsValue> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    if body.is_some() {
        request.headers().set("Content-Type", "application/json")?;
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text: js_sys::JsString = JsFuture::from(resp.text()?).await?.dyn_into()?;
    Ok((resp.status(), String::from(text)))
}

/// レスポンス本文をデコード
///
/// エラーステータスでも `{status, message}` が返ることがあるので先にパースを試す。
/// パースできなければ、2xxならJSONエラー、それ以外はHTTPステータスエラー
pub fn decode_body<T: DeserializeOwned>(status: u16, text: &str) -> Result<T> {
    match serde_json::from_str::<T>(text) {
        Ok(parsed) => Ok(parsed),
        Err(e) if (200..300).contains(&status) => Err(e.into()),
        Err(_) => Err(Error::Http { status }),
    }
}

fn transport(e: JsValue) -> Error {
    web_sys::console::error_2(&JsValue::from_str("fetch failed:"), &e);
    let message = e.as_string().unwrap_or_else(|| format!("{:?}", e));
    Error::Transport(message)
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use nutriscan_common::{messages, Orchestrator};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn unreachable_backend() -> FetchBackend {
        let base = "http://127.0.0.1:9".to_string();
        FetchBackend::new(Endpoints {
            search: base.clone(),
            detection: base.clone(),
            nutrition: base,
        })
    }

    #[wasm_bindgen_test]
    async fn wasm_unreachable_search_becomes_error_entry() {
        let orchestrator = Orchestrator::new(unreachable_backend());

        orchestrator.submit("apple").await;

        let last = orchestrator.entries().last().map(|e| e.render().to_string());
        assert_eq!(last.as_deref(), Some(messages::SEARCH_ERROR));
    }

    #[wasm_bindgen_test]
    async fn wasm_unreachable_detection_returns_to_idle() {
        let orchestrator = Orchestrator::new(unreachable_backend());

        orchestrator.scan().await;

        let last = orchestrator.entries().last().map(|e| e.render().to_string());
        assert_eq!(last.as_deref(), Some(messages::DETECTION_CONNECT_ERROR));
        assert!(orchestrator.can_scan());
    }
}
