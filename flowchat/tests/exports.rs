//! Smoke test that the facade re-exports the surface the README promises.

use flowchat::{
    declared_tools, AgentSettings, ChatMessage, CompletionOutcome, ConnectionSettings, Provider,
    Role, RUN_WORKFLOW,
};

#[test]
fn facade_surface_is_usable() {
    let message = ChatMessage::user("hello");
    assert_eq!(message.role, Role::User);

    let outcome = CompletionOutcome::Text("hi".to_string());
    assert_eq!(outcome.text(), "hi");

    assert_eq!(RUN_WORKFLOW.name, "runWorkflow");
    assert_eq!(declared_tools().len(), 1);

    let connection = ConnectionSettings::default();
    assert_eq!(connection.provider, Provider::Local);

    let instruction = AgentSettings::default().system_instruction(&connection.workflow_names);
    assert!(instruction.contains("runWorkflow"));
}
