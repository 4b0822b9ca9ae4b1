//! Request, wire and error types

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;
use uicraft_core::{ActionError, Operation};

/// One completion call. Built fresh per call, never stored.
#[derive(Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub temperature: f32,
    pub api_key: String,
    pub prompt: String,
}

impl CompletionRequest {
    pub fn new(
        model: impl Into<String>,
        temperature: f32,
        api_key: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            temperature,
            api_key: api_key.into(),
            prompt: prompt.into(),
        }
    }
}

impl fmt::Debug for CompletionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionRequest")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("api_key", &"<redacted>")
            .field("prompt_len", &self.prompt.len())
            .finish()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("{0}")]
    Provider(String),
}

impl CompletionError {
    /// Classify a non-success HTTP response. Auth status codes are
    /// authoritative; the body is only searched when the status says nothing.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => CompletionError::InvalidApiKey,
            _ => Self::from_message(format!("API error {}: {}", status, body)),
        }
    }

    /// Classify free-form failure text
    pub fn from_message(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        if mentions_api_key(&detail) {
            CompletionError::InvalidApiKey
        } else {
            CompletionError::Provider(detail)
        }
    }

    /// Map to the page-level taxonomy for the attempted operation
    pub fn into_action_error(self, operation: Operation) -> ActionError {
        match self {
            CompletionError::InvalidApiKey => ActionError::InvalidApiKey,
            CompletionError::Provider(detail) => ActionError::Provider { operation, detail },
        }
    }
}

fn api_key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)api[\s_-]?key").expect("static pattern"))
}

/// True when provider error text points at the API key
pub fn mentions_api_key(text: &str) -> bool {
    api_key_pattern().is_match(text)
}

// ============== Wire format ==============

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}
