//! Authenticated REST client for the workflow-automation server

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use flowchat_core::{WorkflowError, WorkflowRunner};

use crate::error::GatewayError;
use crate::types::{ExecutionStatus, WorkflowList, WorkflowSummary};

pub const API_KEY_HEADER: &str = "X-N8N-API-KEY";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct WorkflowGateway {
    http: Client,
    base_url: String,
    api_key: String,
}

impl WorkflowGateway {
    pub fn new(base_url: String, api_key: String) -> Result<Self, GatewayError> {
        if api_key.trim().is_empty() {
            return Err(GatewayError::Config("api_key cannot be empty".to_string()));
        }

        reqwest::Url::parse(&base_url)
            .map_err(|err| GatewayError::Config(format!("invalid base_url: {err}")))?;

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    pub async fn list_workflows(&self) -> Result<Vec<WorkflowSummary>, GatewayError> {
        let list: WorkflowList = self.request(Method::GET, "/api/v1/workflows").await?;
        Ok(list.data)
    }

    /// Starts the workflow; returns the execution id when the server
    /// reports one.
    pub async fn execute_workflow(&self, id: &str) -> Result<Option<String>, GatewayError> {
        let body: Value = self
            .request(Method::POST, &format!("/api/v1/workflows/{id}/run"))
            .await?;
        Ok(extract_execution_id(&body))
    }

    pub async fn execution_status(&self, execution_id: &str) -> Result<ExecutionStatus, GatewayError> {
        self.request(Method::GET, &format!("/api/v1/executions/{execution_id}"))
            .await
    }

    /// Resolves a workflow by display name, executes it, and reports the
    /// outcome as one human-readable string.
    pub async fn run_workflow_by_name(&self, name: &str) -> Result<String, GatewayError> {
        let span = tracing::info_span!("run_workflow", workflow = name);
        let _guard = span.enter();

        let workflows = self.list_workflows().await?;
        let workflow = workflows
            .iter()
            .find(|workflow| workflow.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                GatewayError::NotFound(format!(
                    "no workflow named '{name}' exists on the automation server"
                ))
            })?;

        let execution = self.execute_workflow(&workflow.id).await?;
        tracing::info!(workflow_id = %workflow.id, execution = ?execution, "workflow started");

        Ok(match execution {
            Some(execution_id) => format!(
                "Workflow '{}' executed successfully (execution {execution_id}).",
                workflow.name
            ),
            None => format!("Workflow '{}' executed successfully.", workflow.name),
        })
    }

    async fn request<Resp>(&self, method: Method, path: &str) -> Result<Resp, GatewayError>
    where
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        let response = self
            .http
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<Resp>()
                .await
                .map_err(|err| GatewayError::Malformed(err.to_string()));
        }

        Err(match status {
            StatusCode::UNAUTHORIZED => GatewayError::Auth,
            StatusCode::FORBIDDEN => GatewayError::Forbidden,
            StatusCode::NOT_FOUND => {
                GatewayError::NotFound(format!("the automation server has no resource at {path}"))
            }
            other => {
                let body: Value = response.json().await.unwrap_or(Value::Null);
                let message = body
                    .get("message")
                    .and_then(Value::as_str)
                    .or_else(|| body.get("error").and_then(Value::as_str))
                    .unwrap_or("unknown error")
                    .to_string();
                GatewayError::Api {
                    status: other.as_u16(),
                    message,
                }
            }
        })
    }
}

fn extract_execution_id(body: &Value) -> Option<String> {
    // Field name and nesting vary across server versions; the id itself may
    // be a string or a number.
    let id = body
        .get("executionId")
        .or_else(|| body.pointer("/data/executionId"))
        .or_else(|| body.get("id"))?;
    match id {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

#[async_trait::async_trait]
impl WorkflowRunner for WorkflowGateway {
    async fn run_workflow(&self, name: &str) -> Result<String, WorkflowError> {
        Ok(self.run_workflow_by_name(name).await?)
    }
}
