use thiserror::Error;

use flowchat_core::WorkflowError;

/// Gateway failures, each with a display string fit to show a user
/// verbatim. Status codes stop here; callers only see the message.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid gateway configuration: {0}")]
    Config(String),
    #[error("the workflow server rejected the API key")]
    Auth,
    #[error("the workflow server refused the request; the API key lacks permission")]
    Forbidden,
    #[error("{0}")]
    NotFound(String),
    #[error("the workflow server returned an error ({status}): {message}")]
    Api { status: u16, message: String },
    // Connection refused, DNS failure, and CORS-blocked fetches all land
    // here; they are indistinguishable at the transport level.
    #[error("could not reach the workflow server ({0}); it may be offline or blocking the request")]
    Transport(String),
    #[error("malformed response from the workflow server: {0}")]
    Malformed(String),
}

impl From<GatewayError> for WorkflowError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::NotFound(message) => WorkflowError::NotFound(message),
            other => WorkflowError::ExecutionFailed(other.to_string()),
        }
    }
}
