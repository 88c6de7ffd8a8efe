use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{
    LOCAL_SETTINGS_FILE, SONAR_QUBE_AUTH_TOKEN_ENV, SONAR_QUBE_PROJECT_KEY_ENV, SONAR_QUBE_URL_ENV,
    USER_SETTINGS_DIR, USER_SETTINGS_FILE,
};
use crate::errors::{ReportError, ReportResult};
use crate::structs::config::settings_file::SettingsFile;

pub struct ConfigManager;

impl ConfigManager {
    /// Reads the settings file (if any) and overlays the process environment.
    /// Also returns the file that was read, so it can be logged once a logger exists.
    pub fn load(explicit_path: Option<&Path>) -> ReportResult<(SettingsFile, Option<PathBuf>)> {
        let source = Self::locate_settings_file(explicit_path)?;
        let settings = match &source {
            Some(path) => Self::read_settings_file(path)?,
            None => SettingsFile::default(),
        };

        Ok((Self::apply_env(settings, |name| std::env::var(name).ok()), source))
    }

    pub fn locate_settings_file(explicit_path: Option<&Path>) -> ReportResult<Option<PathBuf>> {
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(ReportError::config_file_error(
                    &path.display().to_string(),
                    "file does not exist",
                ));
            }
            return Ok(Some(path.to_path_buf()));
        }

        let local = PathBuf::from(LOCAL_SETTINGS_FILE);
        if local.exists() {
            return Ok(Some(local));
        }

        let user = dirs::config_dir().map(|d| d.join(USER_SETTINGS_DIR).join(USER_SETTINGS_FILE));
        Ok(user.filter(|p| p.exists()))
    }

    pub fn read_settings_file(path: &Path) -> ReportResult<SettingsFile> {
        let content = fs::read_to_string(path)
            .map_err(|e| ReportError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        toml::from_str(&content)
            .map_err(|e| ReportError::config_file_error(&path.display().to_string(), e.message()))
    }

    /// Environment values win over the settings file; blank values are ignored.
    pub fn apply_env<F>(mut settings: SettingsFile, lookup: F) -> SettingsFile
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_blank(SONAR_QUBE_URL_ENV) {
            settings.server_url = Some(url);
        }
        if let Some(token) = non_blank(SONAR_QUBE_AUTH_TOKEN_ENV) {
            settings.auth_token = Some(token);
        }
        if let Some(project) = non_blank(SONAR_QUBE_PROJECT_KEY_ENV) {
            settings.project_key = Some(project);
        }

        settings
    }
}
