mod orchestrator;
mod settings;

pub use orchestrator::{Orchestrator, UNKNOWN_WORKFLOW};
pub use settings::{AgentSettings, ConnectionSettings};

pub use flowchat_core::{
    ChatError, ChatMessage, CompletionBackend, CompletionCall, CompletionOutcome, FunctionCall,
    Role, WorkflowError, WorkflowRunner,
};
pub use flowchat_llm::Provider;
