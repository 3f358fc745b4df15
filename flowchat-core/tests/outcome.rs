use serde_json::json;

use flowchat_core::{CompletionOutcome, FunctionCall};

#[test]
fn text_outcome_has_no_call() {
    let outcome = CompletionOutcome::Text("Hi there".to_string());
    assert_eq!(outcome.text(), "Hi there");
    assert!(outcome.function_call().is_none());
    assert_eq!(outcome.into_text(), "Hi there");
}

#[test]
fn tool_outcome_exposes_single_call() {
    let outcome = CompletionOutcome::ToolCall {
        text: String::new(),
        call: FunctionCall {
            name: "runWorkflow".to_string(),
            args: json!({"workflowName": "Nightly Backup"}),
        },
    };
    assert_eq!(outcome.function_call().map(|call| call.name.as_str()), Some("runWorkflow"));
    // Collapsing discards the call, never panics.
    assert_eq!(outcome.into_text(), "");
}
