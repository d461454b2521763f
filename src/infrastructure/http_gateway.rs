// HTTP gateway to the estimate and chat backend
use crate::application::backend_gateway::{BackendGateway, GatewayError, ProjectForm};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpGateway {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    reply: Option<String>,
}

impl HttpGateway {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl BackendGateway for HttpGateway {
    async fn calculate(&self, form: &ProjectForm) -> Result<serde_json::Value, GatewayError> {
        let response = self
            .client
            .post(self.endpoint("/api/calculate"))
            .json(form)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(|v| v.as_str())
                .map(str::to_string);
            tracing::warn!("Estimate backend returned {}: {:?}", status, message);
            return Err(GatewayError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }

    async fn chat(&self, message: &str) -> Result<Option<String>, GatewayError> {
        let response = self
            .client
            .post(self.endpoint("/api/chat"))
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        // The backend reports its own failures inside `reply`, so the status is not checked
        let status = response.status();
        let body = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;
        tracing::debug!("Chat backend answered {}", status);

        Ok(body.reply)
    }
}
