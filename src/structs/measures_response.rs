use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MeasuresResponse {
    #[serde(default)]
    pub component: Option<MeasuredComponent>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MeasuredComponent {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub measures: Vec<Measure>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measure {
    pub metric: String,
    #[serde(default)]
    pub value: Option<String>,
}
