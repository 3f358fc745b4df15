use flowchat_core::ChatError;
use flowchat_gateway::WorkflowGateway;
use flowchat_llm::{CompletionClient, Provider, RUN_WORKFLOW};

/// Process-wide connection state. Created with defaults at startup and
/// replaced wholesale when the user saves; memory-only, lost on reload.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectionSettings {
    pub provider: Provider,
    pub local_base_url: String,
    pub local_model: String,
    pub cloud_api_key: String,
    pub cloud_model: String,
    pub gateway_url: String,
    pub gateway_api_key: String,
    pub workflow_names: Vec<String>,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            provider: Provider::Local,
            local_base_url: "http://localhost:1234/v1".to_string(),
            local_model: "local-model".to_string(),
            cloud_api_key: String::new(),
            cloud_model: "openrouter/auto".to_string(),
            gateway_url: "http://localhost:5678".to_string(),
            gateway_api_key: String::new(),
            workflow_names: Vec::new(),
        }
    }
}

impl ConnectionSettings {
    /// Model identifier for the selected provider.
    pub fn active_model(&self) -> &str {
        match self.provider {
            Provider::Local => &self.local_model,
            Provider::Cloud => &self.cloud_model,
        }
    }

    pub fn completion_client(&self) -> Result<CompletionClient, ChatError> {
        match self.provider {
            Provider::Local => CompletionClient::local(&self.local_base_url),
            Provider::Cloud => CompletionClient::cloud(self.cloud_api_key.clone()),
        }
    }

    pub fn workflow_gateway(&self) -> Result<WorkflowGateway, ChatError> {
        WorkflowGateway::new(self.gateway_url.clone(), self.gateway_api_key.clone())
            .map_err(|err| ChatError::InvalidConfig(err.to_string()))
    }
}

/// Capability flags advertised to the model. They only shape the system
/// instruction text; neither flag changes request construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AgentSettings {
    pub auto_model_selection: bool,
    pub reasoning_steps: bool,
}

impl AgentSettings {
    /// System instruction enumerating the active capability flags and the
    /// known workflow names, so the model can reference them verbally.
    pub fn system_instruction(&self, workflow_names: &[String]) -> String {
        let mut instruction = String::from(
            "You are a helpful assistant that can run the user's automation workflows. \
             When the user asks to run a workflow, call the ",
        );
        instruction.push_str(RUN_WORKFLOW.name);
        instruction.push_str(
            " tool with the workflow's exact name. After a workflow has run, summarize \
             the outcome in plain language; never show raw tool output.",
        );

        instruction.push_str(if self.auto_model_selection {
            " Automatic model selection is enabled."
        } else {
            " Automatic model selection is disabled."
        });
        instruction.push_str(if self.reasoning_steps {
            " Step-by-step reasoning is enabled."
        } else {
            " Step-by-step reasoning is disabled."
        });

        if workflow_names.is_empty() {
            instruction.push_str(" The user has no known workflows yet.");
        } else {
            instruction.push_str(" The user's known workflows are: ");
            instruction.push_str(&workflow_names.join(", "));
            instruction.push('.');
        }

        instruction
    }
}
