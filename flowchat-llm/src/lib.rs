mod client;
mod mapper;
mod tools;

// Wire types for OpenAI-style endpoints (always available)
pub mod wire;

pub use client::{
    CompletionClient, Provider, CLOUD_ENDPOINT, EMPTY_RESPONSE_TEXT, INVALID_MESSAGE_TEXT,
    MALFORMED_TOOL_CALL_TEXT,
};
pub use flowchat_core::{
    ChatError, ChatMessage, CompletionBackend, CompletionCall, CompletionOutcome, FunctionCall,
    Role,
};
pub use mapper::map_history;
pub use tools::{declared_tools, ToolDeclaration, RUN_WORKFLOW, WORKFLOW_NAME_ARG};
