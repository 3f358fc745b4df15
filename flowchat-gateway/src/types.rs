use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WorkflowSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub active: bool,
}

/// List envelope the automation server wraps collection responses in.
#[derive(Debug, Deserialize)]
pub(crate) struct WorkflowList {
    #[serde(default)]
    pub data: Vec<WorkflowSummary>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ExecutionStatus {
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub status: Option<String>,
}
