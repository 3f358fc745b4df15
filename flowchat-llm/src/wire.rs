//! Wire types for OpenAI-style chat-completions endpoints
//!
//! The request side mirrors what both supported providers accept; the
//! response side is deliberately loose (`Option` + `default` everywhere)
//! so that a malformed body degrades instead of failing deserialization.

use serde::{Deserialize, Serialize};

use flowchat_core::Value;

/// Request body for the chat-completions endpoint
#[derive(Serialize, Debug, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ProviderMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolWire>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<String>,
}

/// One wire-format message. Assistant tool-call entries carry a null
/// `content` and a synthesized `tool_calls` descriptor; tool-result entries
/// carry the matching `tool_call_id` plus the declared function name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProviderMessage {
    pub role: String,
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCallWire>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ProviderMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self::plain("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::plain("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::plain("assistant", content)
    }

    pub fn assistant_call(id: impl Into<String>, name: impl Into<String>, arguments: String) -> Self {
        Self {
            role: "assistant".to_string(),
            content: None,
            tool_calls: Some(vec![ToolCallWire {
                id: id.into(),
                kind: "function".to_string(),
                function: FunctionCallWire {
                    name: name.into(),
                    arguments,
                },
            }]),
            tool_call_id: None,
            name: None,
        }
    }

    pub fn tool_result(
        call_id: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            role: "tool".to_string(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: Some(call_id.into()),
            name: Some(name.into()),
        }
    }

    fn plain(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
            name: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ToolCallWire {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionCallWire,
}

/// Function name + serialized-arguments string, as providers emit it
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FunctionCallWire {
    pub name: String,
    pub arguments: String,
}

/// Tool declaration in the shape OpenAI-style tool arrays demand
#[derive(Serialize, Debug, Clone)]
pub struct ToolWire {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionDefWire,
}

#[derive(Serialize, Debug, Clone)]
pub struct FunctionDefWire {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Non-streaming response from chat completions
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<ToolCallWire>>,
}
