use serde::{Deserialize, Serialize};
use crate::enums::severity::Severity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueRecord {
    #[serde(default)]
    pub key: String,
    pub rule: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default, rename = "type")]
    pub issue_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub component: String,
    #[serde(default)]
    pub line: Option<u32>,
}

impl IssueRecord {
    /// The file part of a `project:path/to/file` component identifier.
    pub fn file_path(&self) -> &str {
        self.component.rsplit(':').next().unwrap_or_default()
    }
}
