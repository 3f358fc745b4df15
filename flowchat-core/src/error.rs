use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("unsupported provider '{0}'")]
    UnsupportedProvider(String),
    #[error("failed to get response, status {status}")]
    Http { status: u16, body: String },
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("serialization/deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ChatError {
    /// Response body kept for diagnostics on HTTP failures.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            ChatError::Http { body, .. } => Some(body),
            _ => None,
        }
    }
}
