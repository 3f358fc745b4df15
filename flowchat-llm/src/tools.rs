//! Static registry of the single externally invokable capability

use serde_json::json;

use flowchat_core::Value;

use crate::wire::{FunctionDefWire, ToolWire};

/// Argument key the model fills with the workflow's display name.
pub const WORKFLOW_NAME_ARG: &str = "workflowName";

/// Static capability descriptor advertised to the model when tool use is
/// permitted. Immutable for the process lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolDeclaration {
    pub name: &'static str,
    pub description: &'static str,
}

/// The one supported tool: execute a named automation workflow.
pub const RUN_WORKFLOW: ToolDeclaration = ToolDeclaration {
    name: "runWorkflow",
    description: "Execute one of the user's automation workflows by its name",
};

impl ToolDeclaration {
    pub fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                WORKFLOW_NAME_ARG: {
                    "type": "string",
                    "description": "Exact name of the workflow to execute"
                }
            },
            "required": [WORKFLOW_NAME_ARG]
        })
    }

    pub fn to_wire(&self) -> ToolWire {
        ToolWire {
            kind: "function".to_string(),
            function: FunctionDefWire {
                name: self.name.to_string(),
                description: self.description.to_string(),
                parameters: self.parameters(),
            },
        }
    }
}

/// Tool array attached to a request when tool calling is enabled.
pub fn declared_tools() -> Vec<ToolWire> {
    vec![RUN_WORKFLOW.to_wire()]
}
