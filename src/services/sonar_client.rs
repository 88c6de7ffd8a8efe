use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use crate::enums::client_error::ClientError;
use crate::traits::sonar_api::{JsonObject, QueryParams, SonarApi};

#[derive(Clone)]
pub struct SonarQubeClient {
    base_url: String,
    token: String,
    client: Client,
}

impl SonarQubeClient {
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("⚠️ Falling back to default HTTP client: {e}");
                Client::new()
            });

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client,
        }
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    async fn make_request(&self, url: &str, params: &QueryParams) -> Result<JsonObject, ClientError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .query(params)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Status { status: status.as_u16(), body });
        }

        match response.json::<Value>().await.map_err(|e| ClientError::Decode(e.to_string()))? {
            Value::Object(map) => Ok(map),
            Value::Array(_) => Err(ClientError::NotAnObject("an array")),
            _ => Err(ClientError::NotAnObject("a scalar")),
        }
    }
}

#[async_trait]
impl SonarApi for SonarQubeClient {
    async fn get(&self, endpoint: &str, params: &QueryParams) -> JsonObject {
        let url = self.url_for(endpoint);
        log::debug!("🌐 GET {url} {params:?}");

        match self.make_request(&url, params).await {
            Ok(body) => body,
            Err(e) => {
                log::error!("Error fetching data from {url}: {e}");
                JsonObject::new()
            }
        }
    }
}
