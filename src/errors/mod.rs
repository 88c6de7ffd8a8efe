use std::error::Error as StdError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    // Configuration errors
    Configuration {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFile {
        path: String,
        reason: String,
    },

    // Server data errors
    MalformedResponse {
        endpoint: String,
        reason: String,
    },

    // File operation errors
    FileOperation {
        file_path: String,
        operation: String,
        reason: String,
    },

    // Document errors
    Render {
        stage: String,
        reason: String,
    },
}

impl ReportError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFile {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed_response(endpoint: &str, reason: &str) -> Self {
        Self::MalformedResponse {
            endpoint: endpoint.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperation {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn render_error(stage: &str, reason: &str) -> Self {
        Self::Render {
            stage: stage.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration { message, field, suggestion } => {
                let mut msg = format!("Configuration error: {message}");
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::ConfigurationFile { path, reason } => {
                format!("Settings file error at '{path}': {reason}\n💡 Check file permissions and TOML syntax")
            }
            Self::MalformedResponse { endpoint, reason } => {
                format!("Malformed response from '{endpoint}': {reason}\n💡 Check that the server version exposes the expected API")
            }
            Self::FileOperation { file_path, operation, reason } => {
                format!("File operation '{operation}' failed for '{file_path}': {reason}\n💡 Check file permissions and path")
            }
            Self::Render { stage, reason } => {
                format!("Document rendering failed during {stage}: {reason}")
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for ReportError {}

/// Result type alias for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Convert from standard library errors
impl From<std::io::Error> for ReportError {
    fn from(error: std::io::Error) -> Self {
        Self::FileOperation {
            file_path: String::new(),
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedResponse {
            endpoint: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for ReportError {
    fn from(error: toml::de::Error) -> Self {
        Self::ConfigurationFile {
            path: String::new(),
            reason: error.message().to_string(),
        }
    }
}

impl From<lopdf::Error> for ReportError {
    fn from(error: lopdf::Error) -> Self {
        Self::Render {
            stage: "PDF encoding".to_string(),
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_message_names_field_and_suggestion() {
        let error = ReportError::config_error(
            "missing required setting",
            Some("SONAR_QUBE_URL"),
            Some("export SONAR_QUBE_URL=https://sonar.example.com"),
        );
        let message = error.user_message();
        assert!(message.contains("missing required setting"));
        assert!(message.contains("(field: SONAR_QUBE_URL)"));
        assert!(message.contains("export SONAR_QUBE_URL"));
    }

    #[test]
    fn io_errors_become_file_operation_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: ReportError = io.into();
        assert!(matches!(error, ReportError::FileOperation { .. }));
        assert!(error.to_string().contains("denied"));
    }
}
