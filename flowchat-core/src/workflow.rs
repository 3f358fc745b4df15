use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    ExecutionFailed(String),
}

/// Seam for the external workflow-automation capability. Implementations
/// report success or failure as one human-readable message; status codes
/// and transport detail never cross this boundary.
#[async_trait::async_trait]
pub trait WorkflowRunner: Send + Sync {
    async fn run_workflow(&self, name: &str) -> Result<String, WorkflowError>;
}
