//! Flowchat: headless chat orchestration over OpenAI-style providers with
//! one-shot workflow tool-calling.
//!
//! The UI layer owns the transcript and settings; this workspace provides
//! everything behind them: provider message mapping, the completion
//! clients, the workflow gateway, and the two-round orchestrator.

pub use flowchat_core::{
    ChatError, ChatMessage, CompletionBackend, CompletionCall, CompletionOutcome, FunctionCall,
    Role, Value, WorkflowError, WorkflowRunner,
};

#[cfg(feature = "llm")]
pub use flowchat_llm::{
    declared_tools, map_history, CompletionClient, Provider, ToolDeclaration, RUN_WORKFLOW,
    WORKFLOW_NAME_ARG,
};

#[cfg(feature = "gateway")]
pub use flowchat_gateway::{GatewayError, WorkflowGateway, API_KEY_HEADER};

#[cfg(feature = "agent")]
pub use flowchat_agent::{AgentSettings, ConnectionSettings, Orchestrator, UNKNOWN_WORKFLOW};
