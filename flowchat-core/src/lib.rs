mod error;
mod llm;
mod message;
mod workflow;

pub use error::ChatError;
pub use llm::{CompletionBackend, CompletionCall, CompletionOutcome};
pub use message::{ChatMessage, FunctionCall, Role};
pub use workflow::{WorkflowError, WorkflowRunner};

pub type Value = serde_json::Value;
