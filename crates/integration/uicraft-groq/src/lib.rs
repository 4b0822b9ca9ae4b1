//! Completion client for the hosted LLM provider
//!
//! One request in, one block of text out. The provider speaks the
//! OpenAI-compatible chat completions protocol; the prompt goes out as a
//! single user message and the first choice comes back verbatim.

pub mod client;
pub mod types;

pub use client::GroqClient;
pub use types::{CompletionError, CompletionRequest};

use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, CompletionError>;

/// Boundary to the provider. The web controller only sees this trait.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Provider identifier for logs and health output
    fn name(&self) -> &str;

    /// Issue one completion. No retries.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
