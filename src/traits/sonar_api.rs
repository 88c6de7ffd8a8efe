use async_trait::async_trait;
use serde_json::{Map, Value};

pub type JsonObject = Map<String, Value>;
pub type QueryParams = Vec<(String, String)>;

/// Read access to the analysis server. An empty object means "no data".
#[async_trait]
pub trait SonarApi: Send + Sync {
    async fn get(&self, endpoint: &str, params: &QueryParams) -> JsonObject;
}

/// Builds query parameters from borrowed pairs.
pub fn query(pairs: &[(&str, &str)]) -> QueryParams {
    pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}
