pub mod client;
mod error;
mod types;

pub use client::{WorkflowGateway, API_KEY_HEADER};
pub use error::GatewayError;
pub use types::{ExecutionStatus, WorkflowSummary};
