//! Chat-completions client for the two supported providers
//!
//! One outbound request per invocation; no retries, no caching, no
//! streaming. Transport and server failures are errors; protocol-shaped
//! garbage from a provider degrades to visible placeholder text so the
//! caller can always append something to the transcript.

use std::str::FromStr;
use std::time::Duration;

use url::Url;

use flowchat_core::{
    ChatError, CompletionBackend, CompletionCall, CompletionOutcome, FunctionCall,
};

use crate::mapper::map_history;
use crate::tools::declared_tools;
use crate::wire::{ChatCompletionRequest, ChatCompletionResponse};

/// Fixed endpoint for the cloud model router.
pub const CLOUD_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

const COMPLETIONS_PATH: &str = "/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Placeholder shown when the body is unparseable or carries no choices.
pub const EMPTY_RESPONSE_TEXT: &str = "empty or invalid response from the provider";
/// Placeholder shown when the first choice lacks a message object.
pub const INVALID_MESSAGE_TEXT: &str = "invalid message structure from the provider";
/// Placeholder shown when a tool call's arguments are not valid JSON.
pub const MALFORMED_TOOL_CALL_TEXT: &str = "malformed tool call";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    Local,
    Cloud,
}

impl FromStr for Provider {
    type Err = ChatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "local" => Ok(Provider::Local),
            "cloud" => Ok(Provider::Cloud),
            other => Err(ChatError::UnsupportedProvider(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CompletionClient {
    http: reqwest::Client,
    provider: Provider,
    endpoint: String,
    api_key: Option<String>,
}

impl CompletionClient {
    /// Client for a locally hosted inference server. Any trailing `/v1`
    /// segment on the configured base URL is stripped before the
    /// completions path is appended.
    pub fn local(base_url: &str) -> Result<Self, ChatError> {
        Url::parse(base_url)
            .map_err(|err| ChatError::InvalidConfig(format!("invalid local endpoint: {err}")))?;

        let mut base = base_url.trim_end_matches('/');
        if let Some(stripped) = base.strip_suffix("/v1") {
            base = stripped;
        }

        Ok(Self {
            http: build_http()?,
            provider: Provider::Local,
            endpoint: format!("{base}{COMPLETIONS_PATH}"),
            api_key: None,
        })
    }

    /// Client for the cloud model router; the key is attached as a bearer
    /// token on every request.
    pub fn cloud(api_key: impl Into<String>) -> Result<Self, ChatError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ChatError::InvalidConfig(
                "cloud provider requires an API key".to_string(),
            ));
        }

        Ok(Self {
            http: build_http()?,
            provider: Provider::Cloud,
            endpoint: CLOUD_ENDPOINT.to_string(),
            api_key: Some(api_key),
        })
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Point the client at a different completions URL (self-hosted
    /// routers, test servers).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

fn build_http() -> Result<reqwest::Client, ChatError> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|err| ChatError::Transport(err.to_string()))
}

#[async_trait::async_trait]
impl CompletionBackend for CompletionClient {
    async fn complete(&self, call: CompletionCall<'_>) -> Result<CompletionOutcome, ChatError> {
        let request = ChatCompletionRequest {
            model: call.model.to_string(),
            messages: map_history(call.history, call.system_instruction),
            tools: call.allow_tools.then(declared_tools),
            tool_choice: call.allow_tools.then(|| "auto".to_string()),
        };

        tracing::debug!(
            provider = ?self.provider,
            model = call.model,
            messages = request.messages.len(),
            allow_tools = call.allow_tools,
            "sending completion request"
        );

        let mut builder = self.http.post(&self.endpoint).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| ChatError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ChatError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(ChatError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(interpret_body(&body, call.allow_tools))
    }
}

/// Normalizes a 2xx body. Protocol violations degrade to placeholder text
/// rather than erroring; only the first tool call is honored, and none is
/// honored when the request was built without tools.
fn interpret_body(body: &str, allow_tools: bool) -> CompletionOutcome {
    let parsed: ChatCompletionResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!(error = %err, "completion body is not valid JSON");
            return CompletionOutcome::Text(EMPTY_RESPONSE_TEXT.to_string());
        }
    };

    let Some(choice) = parsed.choices.into_iter().next() else {
        return CompletionOutcome::Text(EMPTY_RESPONSE_TEXT.to_string());
    };
    let Some(message) = choice.message else {
        return CompletionOutcome::Text(INVALID_MESSAGE_TEXT.to_string());
    };

    let text = message.content.unwrap_or_default();
    let Some(first) = message.tool_calls.unwrap_or_default().into_iter().next() else {
        return CompletionOutcome::Text(text);
    };

    if !allow_tools {
        tracing::warn!(
            function = first.function.name,
            "provider returned a tool call on a tools-disabled request; ignoring"
        );
        return CompletionOutcome::Text(text);
    }

    match serde_json::from_str(&first.function.arguments) {
        Ok(args) => CompletionOutcome::ToolCall {
            text,
            call: FunctionCall {
                name: first.function.name,
                args,
            },
        },
        Err(err) => {
            tracing::warn!(error = %err, function = first.function.name, "unparseable tool-call arguments");
            CompletionOutcome::Text(MALFORMED_TOOL_CALL_TEXT.to_string())
        }
    }
}
