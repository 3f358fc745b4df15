//! Projection of the application transcript into provider wire format

use std::sync::atomic::{AtomicU64, Ordering};

use flowchat_core::{ChatMessage, Role};

use crate::wire::ProviderMessage;

// Correlation ids come from a process-local counter, so they are unique for
// the process lifetime and stable within a single mapping pass.
static CALL_COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_call_id(name: &str) -> String {
    let n = CALL_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("call_{name}_{n}")
}

/// Maps an ordered transcript plus a system instruction into the message
/// array an OpenAI-style endpoint expects.
///
/// The first output entry is always the system instruction; system-role
/// entries that slipped into the history are filtered out so the request
/// never carries a duplicate. An assistant entry with a `function_call`
/// becomes a null-content tool-call descriptor and opens a pending call; the
/// next tool-role entry closes it, inheriting its correlation id and function
/// name. A tool-role entry with no open call is dropped, not sent maligned.
pub fn map_history(history: &[ChatMessage], system_instruction: &str) -> Vec<ProviderMessage> {
    let mut mapped = Vec::with_capacity(history.len() + 1);
    mapped.push(ProviderMessage::system(system_instruction));

    // Most recent assistant tool call not yet matched by a tool result.
    let mut open_call: Option<(String, String)> = None;

    for message in history {
        match message.role {
            Role::System => continue,
            Role::User => mapped.push(ProviderMessage::user(message.content.clone())),
            Role::Assistant => match &message.function_call {
                Some(call) => {
                    let id = next_call_id(&call.name);
                    open_call = Some((id.clone(), call.name.clone()));
                    mapped.push(ProviderMessage::assistant_call(
                        id,
                        call.name.clone(),
                        serialize_arguments(&call.args),
                    ));
                }
                None => mapped.push(ProviderMessage::assistant(message.content.clone())),
            },
            Role::Tool => match open_call.take() {
                Some((id, name)) => {
                    mapped.push(ProviderMessage::tool_result(id, name, message.content.clone()));
                }
                None => {
                    tracing::warn!("dropping tool message with no preceding assistant tool call");
                }
            },
        }
    }

    mapped
}

fn serialize_arguments(args: &flowchat_core::Value) -> String {
    // A JSON value with string keys cannot fail to serialize; the fallback
    // keeps the mapper infallible regardless.
    serde_json::to_string(args).unwrap_or_else(|_| "{}".to_string())
}
