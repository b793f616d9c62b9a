//! reqwest によるバックエンド実装

use crate::error::Result;
use nutriscan_common::api::{NutritionRequest, SearchRequest};
use nutriscan_common::{
    Backend, DetectionResultsResponse, Endpoints, NutritionResponse, SearchResponse,
    StatusResponse,
};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct HttpBackend {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpBackend {
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoints })
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> nutriscan_common::Result<T> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        tracing::debug!(url = %response.url(), status = status.as_u16(), "response received");

        let body = response.text().await.map_err(transport)?;

        // エラー応答でも {status, message} のJSONが返ることがあるので先にパースを試す
        match serde_json::from_str::<T>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(e) if status.is_success() => Err(e.into()),
            Err(_) => Err(nutriscan_common::Error::Http {
                status: status.as_u16(),
            }),
        }
    }
}

fn transport(e: reqwest::Error) -> nutriscan_common::Error {
    nutriscan_common::Error::Transport(e.to_string())
}

impl Backend for HttpBackend {
    async fn search(&self, query: &str) -> nutriscan_common::Result<SearchResponse> {
        let request = self
            .client
            .post(self.endpoints.search_url())
            .json(&SearchRequest { query });
        self.send(request).await
    }

    async fn start_detection(&self) -> nutriscan_common::Result<StatusResponse> {
        self.send(self.client.post(self.endpoints.start_detection_url())).await
    }

    async fn stop_detection(&self) -> nutriscan_common::Result<StatusResponse> {
        self.send(self.client.post(self.endpoints.stop_detection_url())).await
    }

    async fn detection_results(&self) -> nutriscan_common::Result<DetectionResultsResponse> {
        self.send(self.client.get(self.endpoints.detection_results_url())).await
    }

    async fn nutrition(&self, food_item: &str) -> nutriscan_common::Result<NutritionResponse> {
        let request = self
            .client
            .post(self.endpoints.nutrition_url())
            .json(&NutritionRequest { food_item });
        self.send(request).await
    }
}
