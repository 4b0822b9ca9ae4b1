//! Scripted completion client for tests

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::Notify;
use uicraft_groq::{CompletionClient, CompletionError, CompletionRequest};

/// Replays queued results in order and records every request
pub struct ScriptedClient {
    script: Mutex<VecDeque<Result<String, CompletionError>>>,
    calls: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedClient {
    pub fn new(script: Vec<Result<String, CompletionError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.calls.lock().unwrap().push(request.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CompletionError::Provider("no scripted response".into())))
    }
}

/// Blocks inside `complete` until released, to observe the server mid-cycle
pub struct GatedClient {
    pub entered: Notify,
    pub release: Notify,
    reply: String,
}

impl GatedClient {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            entered: Notify::new(),
            release: Notify::new(),
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl CompletionClient for GatedClient {
    fn name(&self) -> &str {
        "gated"
    }

    async fn complete(&self, _request: &CompletionRequest) -> Result<String, CompletionError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(self.reply.clone())
    }
}
