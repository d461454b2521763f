// Gateway trait for the estimate and chat backend
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Project form as submitted by the user; values are forwarded verbatim
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub built_up_area: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floors: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_sq_yard: Option<serde_json::Value>,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("backend unreachable: {0}")]
    Transport(String),

    /// Backend answered with a non-success status; `message` is its `error` field
    #[error("backend returned {status}")]
    Status { status: u16, message: Option<String> },

    #[error("unreadable backend response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait BackendGateway: Send + Sync {
    /// Submit the project form; returns the raw estimate document on success
    async fn calculate(&self, form: &ProjectForm) -> Result<serde_json::Value, GatewayError>;

    /// Ask the chat assistant; `None` when the response carries no reply
    async fn chat(&self, message: &str) -> Result<Option<String>, GatewayError>;
}
