use crate::{ChatError, ChatMessage, FunctionCall};

/// One completion round, built fresh per call.
#[derive(Clone, Copy, Debug)]
pub struct CompletionCall<'a> {
    pub model: &'a str,
    pub system_instruction: &'a str,
    pub history: &'a [ChatMessage],
    pub allow_tools: bool,
}

/// Normalized completion response. At most one tool call is ever surfaced,
/// even when a provider returns several; the variant makes that a type-level
/// fact instead of an optional field probed at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum CompletionOutcome {
    Text(String),
    ToolCall { text: String, call: FunctionCall },
}

impl CompletionOutcome {
    pub fn text(&self) -> &str {
        match self {
            CompletionOutcome::Text(text) => text,
            CompletionOutcome::ToolCall { text, .. } => text,
        }
    }

    pub fn function_call(&self) -> Option<&FunctionCall> {
        match self {
            CompletionOutcome::Text(_) => None,
            CompletionOutcome::ToolCall { call, .. } => Some(call),
        }
    }

    /// Collapse to plain text, discarding any tool call.
    pub fn into_text(self) -> String {
        match self {
            CompletionOutcome::Text(text) => text,
            CompletionOutcome::ToolCall { text, .. } => text,
        }
    }
}

#[async_trait::async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, call: CompletionCall<'_>) -> Result<CompletionOutcome, ChatError>;
}
