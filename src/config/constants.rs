use std::time::Duration;

pub const SONAR_QUBE_URL_ENV: &str = "SONAR_QUBE_URL";
pub const SONAR_QUBE_AUTH_TOKEN_ENV: &str = "SONAR_QUBE_AUTH_TOKEN";
pub const SONAR_QUBE_PROJECT_KEY_ENV: &str = "SONAR_QUBE_PROJECT_KEY";

pub const LOCAL_SETTINGS_FILE: &str = "sonar-report.toml";
pub const USER_SETTINGS_DIR: &str = "sonar-report";
pub const USER_SETTINGS_FILE: &str = "config.toml";

pub const DEFAULT_OUTPUT_FILE: &str = "output/report.pdf";
pub const DEFAULT_LOG_FILE: &str = "sonar_qube_report.log";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const LOGGER_NAME: &str = "sonar_qube_report";
pub const DEFAULT_LOG_FILTER: &str = "sonar_report=debug";

pub const ISSUES_SEARCH_ENDPOINT: &str = "api/issues/search";
pub const MEASURES_COMPONENT_ENDPOINT: &str = "api/measures/component";
pub const RULES_SHOW_ENDPOINT: &str = "api/rules/show";

pub const OVERVIEW_FACETS: &str = "severities,types,sonarsourceSecurity";
pub const OVERVIEW_METRIC_KEYS: &str = "bugs,vulnerabilities,code_smells,security_hotspots";
pub const ISSUES_PAGE_SIZE: usize = 500;

pub const MAX_CODE_LINE_LENGTH: usize = 120;
pub const CODE_EXAMPLE_HIGHLIGHT_LINE: usize = 1;

pub const REPORT_TITLE: &str = "SonarQube Analysis Report";
pub const FOOTER_ATTRIBUTION: &str = "Generated by SonarQube";

pub fn timeout_duration(secs: u64) -> Duration {
    Duration::from_secs(secs)
}
