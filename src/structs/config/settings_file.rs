use serde::{Deserialize, Serialize};

/// Optional on-disk settings. Every field may be overridden from the environment.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct SettingsFile {
    #[serde(default)]
    pub server_url: Option<String>,

    #[serde(default)]
    pub auth_token: Option<String>,

    #[serde(default)]
    pub project_key: Option<String>,

    #[serde(default)]
    pub output_file: Option<String>,

    #[serde(default)]
    pub log_file: Option<String>,

    #[serde(default)]
    pub timeout_secs: Option<u64>,
}
