use std::path::PathBuf;
use std::time::Duration;
use crate::config::constants::{
    timeout_duration, SONAR_QUBE_AUTH_TOKEN_ENV, SONAR_QUBE_PROJECT_KEY_ENV, SONAR_QUBE_URL_ENV,
};
use crate::errors::{ReportError, ReportResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::settings_file::SettingsFile;

/// Validated runtime configuration, built once at startup and passed down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub server_url: String,
    pub auth_token: String,
    pub project_key: String,
    pub output_file: PathBuf,
    pub log_file: PathBuf,
    pub timeout: Duration,
}

impl ReportConfig {
    pub fn from_settings(settings: SettingsFile) -> ReportResult<Self> {
        let server_url = Self::required(settings.server_url, SONAR_QUBE_URL_ENV)?;
        if !(server_url.starts_with("http://") || server_url.starts_with("https://")) {
            return Err(ReportError::config_error(
                &format!("server URL '{server_url}' must use http or https"),
                Some(SONAR_QUBE_URL_ENV),
                Some("Use the full base URL, e.g. https://sonarqube.example.com"),
            ));
        }

        let auth_token = Self::required(settings.auth_token, SONAR_QUBE_AUTH_TOKEN_ENV)?;
        let project_key = Self::required(settings.project_key, SONAR_QUBE_PROJECT_KEY_ENV)?;

        Ok(Self {
            server_url,
            auth_token,
            project_key,
            output_file: PathBuf::from(settings.output_file.unwrap_or_else(ConfigHelper::default_output_file)),
            log_file: PathBuf::from(settings.log_file.unwrap_or_else(ConfigHelper::default_log_file)),
            timeout: timeout_duration(settings.timeout_secs.unwrap_or_else(ConfigHelper::default_timeout_secs)),
        })
    }

    fn required(value: Option<String>, name: &str) -> ReportResult<String> {
        match value.map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(ReportError::config_error(
                "missing required setting",
                Some(name),
                Some(&format!("Export {name} or add it to sonar-report.toml")),
            )),
        }
    }
}
