//! reqwest-backed client for Groq's OpenAI-compatible endpoint

use crate::types::{ChatMessage, ChatRequest, ChatResponse, CompletionError, CompletionRequest};
use crate::{CompletionClient, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::Instrument;
use uicraft_config::Config;

pub struct GroqClient {
    endpoint: String,
    http_client: reqwest::Client,
}

impl GroqClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Build from resolved configuration. A timeout is only set when configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder
            .build()
            .map_err(|e| CompletionError::Provider(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            http_client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    fn name(&self) -> &str {
        "groq"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let call_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!("completion", %call_id, model = %request.model);
        self.send(request).instrument(span).await
    }
}

impl GroqClient {
    async fn send(&self, request: &CompletionRequest) -> Result<String> {
        let body = ChatRequest {
            model: &request.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            temperature: request.temperature,
        };

        tracing::debug!(prompt_len = request.prompt.len(), "sending completion request");

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&request.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::from_message(format!("Network error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "completion rejected by provider");
            return Err(CompletionError::from_status(status.as_u16(), &text));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::from_message(format!("Parse error: {}", e)))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| CompletionError::Provider("No response content".to_string()))?;

        tracing::info!(response_len = text.len(), "completion received");
        Ok(text)
    }
}
