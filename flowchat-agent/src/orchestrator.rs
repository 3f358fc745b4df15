//! Two-round tool-calling turn protocol
//!
//! One user turn is at most two completion rounds: the first with the tool
//! declaration attached, and, only when the model requests the tool, a
//! second with tools disabled to produce the user-facing summary. The raw
//! tool payload never reaches the transcript as assistant text.

use flowchat_core::{
    ChatError, ChatMessage, CompletionBackend, CompletionCall, CompletionOutcome, Value,
    WorkflowRunner,
};
use flowchat_llm::WORKFLOW_NAME_ARG;

use crate::settings::{AgentSettings, ConnectionSettings};

/// Label used when the model omits the workflow-name argument or sends a
/// non-string value.
pub const UNKNOWN_WORKFLOW: &str = "Unknown Workflow";

pub struct Orchestrator<C, W> {
    backend: C,
    workflows: W,
}

impl<C, W> Orchestrator<C, W>
where
    C: CompletionBackend,
    W: WorkflowRunner,
{
    pub fn new(backend: C, workflows: W) -> Self {
        Self { backend, workflows }
    }

    pub fn backend(&self) -> &C {
        &self.backend
    }

    pub fn workflows(&self) -> &W {
        &self.workflows
    }

    /// Runs one user turn, appending to `history`. Failures never escape:
    /// transport and configuration errors become one generic-failure
    /// assistant entry, and earlier appends (the user message included)
    /// are kept.
    pub async fn run_turn(
        &self,
        history: &mut Vec<ChatMessage>,
        user_input: impl Into<String>,
        connection: &ConnectionSettings,
        agent: &AgentSettings,
    ) {
        history.push(ChatMessage::user(user_input));

        if let Err(err) = self.drive_turn(history, connection, agent).await {
            tracing::warn!(error = %err, "turn aborted");
            history.push(ChatMessage::assistant(format!(
                "Sorry, something went wrong: {err}"
            )));
        }
    }

    async fn drive_turn(
        &self,
        history: &mut Vec<ChatMessage>,
        connection: &ConnectionSettings,
        agent: &AgentSettings,
    ) -> Result<(), ChatError> {
        let instruction = agent.system_instruction(&connection.workflow_names);
        let model = connection.active_model();

        let first = self
            .backend
            .complete(CompletionCall {
                model,
                system_instruction: &instruction,
                history: history.as_slice(),
                allow_tools: true,
            })
            .await?;

        let call = match first {
            CompletionOutcome::Text(text) => {
                history.push(ChatMessage::assistant(text));
                return Ok(());
            }
            CompletionOutcome::ToolCall { call, .. } => call,
        };

        let workflow_name = call
            .args
            .get(WORKFLOW_NAME_ARG)
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_WORKFLOW)
            .to_string();

        history.push(
            ChatMessage::assistant_call(
                format!("Running workflow '{workflow_name}'..."),
                call,
            )
            .with_tools(vec![workflow_name.clone()]),
        );

        // The tool entry reports the actual gateway outcome; a gateway
        // failure is summarized for the model, not raised.
        let outcome = match self.workflows.run_workflow(&workflow_name).await {
            Ok(message) => message,
            Err(err) => format!("Workflow '{workflow_name}' failed: {err}"),
        };
        history.push(ChatMessage::tool(outcome));

        // Second round is always issued with tools disabled; a model that
        // asks for another call is not honored.
        let second = self
            .backend
            .complete(CompletionCall {
                model,
                system_instruction: &instruction,
                history: history.as_slice(),
                allow_tools: false,
            })
            .await?;
        history.push(ChatMessage::assistant(second.into_text()));

        Ok(())
    }
}
