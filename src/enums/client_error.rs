use thiserror::Error;

/// Failures inside the HTTP client. They are logged and never leave the client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network Error: {0}")]
    Transport(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Serialization Error: {0}")]
    Decode(String),
    #[error("Serialization Error: expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}
