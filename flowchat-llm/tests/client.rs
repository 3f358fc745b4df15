use httpmock::prelude::*;
use serde_json::json;

use flowchat_core::ChatError;
use flowchat_llm::{
    ChatMessage, CompletionBackend, CompletionCall, CompletionClient, CompletionOutcome,
    EMPTY_RESPONSE_TEXT, INVALID_MESSAGE_TEXT, MALFORMED_TOOL_CALL_TEXT,
};

fn turn<'a>(history: &'a [ChatMessage], allow_tools: bool) -> CompletionCall<'a> {
    CompletionCall {
        model: "test-model",
        system_instruction: "You are helpful.",
        history,
        allow_tools,
    }
}

fn text_body(content: &str) -> serde_json::Value {
    json!({"choices": [{"message": {"content": content}}]})
}

#[tokio::test]
async fn local_client_posts_to_derived_completions_path() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200).json_body(text_body("Hi there"));
    });

    // Configured base carries a trailing /v1 the client must strip.
    let client = CompletionClient::local(&server.url("/v1")).expect("client");
    let history = vec![ChatMessage::user("hello")];

    let outcome = client.complete(turn(&history, false)).await.expect("complete");
    assert_eq!(outcome, CompletionOutcome::Text("Hi there".to_string()));
    mock.assert();
}

#[tokio::test]
async fn tools_enabled_request_advertises_declaration() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .json_body_partial(r#"{"tool_choice": "auto"}"#);
        then.status(200).json_body(text_body("ok"));
    });

    let client = CompletionClient::local(&server.base_url()).expect("client");
    let history = vec![ChatMessage::user("run it")];

    client.complete(turn(&history, true)).await.expect("complete");
    mock.assert();
}

#[tokio::test]
async fn cloud_client_attaches_bearer_token() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/chat/completions")
            .header("authorization", "Bearer sk-test");
        then.status(200).json_body(text_body("hello from the router"));
    });

    let client = CompletionClient::cloud("sk-test")
        .expect("client")
        .with_endpoint(server.url("/api/v1/chat/completions"));
    let history = vec![ChatMessage::user("hi")];

    let outcome = client.complete(turn(&history, false)).await.expect("complete");
    assert_eq!(outcome.text(), "hello from the router");
    mock.assert();
}

#[tokio::test]
async fn first_tool_call_only_is_honored() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200).json_body(json!({
            "choices": [{"message": {
                "content": null,
                "tool_calls": [
                    {"id": "a", "type": "function",
                     "function": {"name": "runWorkflow", "arguments": "{\"workflowName\":\"Nightly Backup\"}"}},
                    {"id": "b", "type": "function",
                     "function": {"name": "runWorkflow", "arguments": "{\"workflowName\":\"Second\"}"}}
                ]
            }}]
        }));
    });

    let client = CompletionClient::local(&server.base_url()).expect("client");
    let history = vec![ChatMessage::user("run my backup workflow")];

    let outcome = client.complete(turn(&history, true)).await.expect("complete");
    let call = outcome.function_call().expect("tool call");
    assert_eq!(call.name, "runWorkflow");
    assert_eq!(call.args["workflowName"], "Nightly Backup");
}

#[tokio::test]
async fn stray_tool_call_on_disabled_request_is_ignored() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200).json_body(json!({
            "choices": [{"message": {
                "content": "text anyway",
                "tool_calls": [{"id": "a", "type": "function",
                    "function": {"name": "runWorkflow", "arguments": "{}"}}]
            }}]
        }));
    });

    let client = CompletionClient::local(&server.base_url()).expect("client");
    let history = vec![ChatMessage::user("hi")];

    let outcome = client.complete(turn(&history, false)).await.expect("complete");
    assert_eq!(outcome, CompletionOutcome::Text("text anyway".to_string()));
}

#[tokio::test]
async fn malformed_tool_arguments_degrade_to_note() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200).json_body(json!({
            "choices": [{"message": {
                "tool_calls": [{"id": "a", "type": "function",
                    "function": {"name": "runWorkflow", "arguments": "{not json"}}]
            }}]
        }));
    });

    let client = CompletionClient::local(&server.base_url()).expect("client");
    let history = vec![ChatMessage::user("run it")];

    let outcome = client.complete(turn(&history, true)).await.expect("complete");
    assert_eq!(outcome, CompletionOutcome::Text(MALFORMED_TOOL_CALL_TEXT.to_string()));
}

#[tokio::test]
async fn empty_choices_degrade_not_throw() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200).json_body(json!({"choices": []}));
    });

    let client = CompletionClient::local(&server.base_url()).expect("client");
    let history = vec![ChatMessage::user("hi")];

    let outcome = client.complete(turn(&history, true)).await.expect("complete");
    assert_eq!(outcome, CompletionOutcome::Text(EMPTY_RESPONSE_TEXT.to_string()));
}

#[tokio::test]
async fn choice_without_message_degrades_to_placeholder() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200).json_body(json!({"choices": [{"finish_reason": "stop"}]}));
    });

    let client = CompletionClient::local(&server.base_url()).expect("client");
    let history = vec![ChatMessage::user("hi")];

    let outcome = client.complete(turn(&history, true)).await.expect("complete");
    assert_eq!(outcome, CompletionOutcome::Text(INVALID_MESSAGE_TEXT.to_string()));
}

#[tokio::test]
async fn non_json_body_degrades_to_placeholder() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200).body("<html>proxy error page</html>");
    });

    let client = CompletionClient::local(&server.base_url()).expect("client");
    let history = vec![ChatMessage::user("hi")];

    let outcome = client.complete(turn(&history, false)).await.expect("complete");
    assert_eq!(outcome, CompletionOutcome::Text(EMPTY_RESPONSE_TEXT.to_string()));
}

#[tokio::test]
async fn server_error_surfaces_status_and_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(500).json_body(json!({"error": "model exploded"}));
    });

    let client = CompletionClient::local(&server.base_url()).expect("client");
    let history = vec![ChatMessage::user("hi")];

    let err = client.complete(turn(&history, true)).await.unwrap_err();
    match &err {
        ChatError::Http { status, body } => {
            assert_eq!(*status, 500);
            assert!(body.contains("model exploded"));
        }
        other => panic!("expected Http error, got {other:?}"),
    }
    assert!(err.to_string().contains("status 500"));
}
