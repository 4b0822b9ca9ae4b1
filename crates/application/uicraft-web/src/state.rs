//! Application state for the web GUI

use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use uicraft_config::Config;
use uicraft_core::{PendingMode, SessionState};
use uicraft_groq::CompletionClient;

use crate::controller::Controller;

/// Session summary readable while a refresh cycle holds the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStatus {
    pub api_key_set: bool,
    pub has_markup: bool,
    pub pending: PendingMode,
    /// A refresh cycle is running
    pub busy: bool,
}

impl SessionStatus {
    pub fn of(session: &SessionState, busy: bool) -> Self {
        Self {
            api_key_set: session.has_api_key(),
            has_markup: session.has_markup(),
            pending: session.pending,
            busy,
        }
    }
}

/// Shared application state
pub struct AppState {
    /// The one interactive session. Held for a whole refresh cycle so cycles never overlap.
    pub session: Mutex<SessionState>,
    status: watch::Sender<SessionStatus>,
    pub client: Arc<dyn CompletionClient>,
    pub model: String,
    pub temperature: f32,
    /// Server start time
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(config: &Config, client: Arc<dyn CompletionClient>) -> Self {
        let session = match config.api_key.as_deref() {
            Some(key) if !key.is_empty() => SessionState::with_api_key(key),
            _ => SessionState::new(),
        };

        let (status, _) = watch::channel(SessionStatus::of(&session, false));

        Self {
            session: Mutex::new(session),
            status,
            client,
            model: config.model.clone(),
            temperature: config.temperature,
            started_at: chrono::Utc::now(),
        }
    }

    pub fn controller(&self) -> Controller<'_> {
        Controller::new(self.client.as_ref(), &self.model, self.temperature)
    }

    /// Latest published session summary. Never waits on the session lock.
    pub fn status(&self) -> SessionStatus {
        *self.status.borrow()
    }

    pub fn publish(&self, session: &SessionState, busy: bool) {
        self.status.send_replace(SessionStatus::of(session, busy));
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> i64 {
        (chrono::Utc::now() - self.started_at).num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedClient;

    #[tokio::test]
    async fn test_default_key_from_config() {
        let config = Config {
            api_key: Some("gsk_env".into()),
            ..Config::default()
        };
        let state = AppState::new(&config, Arc::new(ScriptedClient::new(vec![])));

        let session = state.session.lock().await;
        assert_eq!(session.api_key.expose(), "gsk_env");
        assert_eq!(state.model, "openai/gpt-oss-safeguard-20b");
        assert!(state.uptime_secs() >= 0);
    }

    #[tokio::test]
    async fn test_no_default_key() {
        let state = AppState::new(&Config::default(), Arc::new(ScriptedClient::new(vec![])));
        assert!(!state.session.lock().await.has_api_key());
        assert!(!state.status().api_key_set);
    }

    #[tokio::test]
    async fn test_publish_updates_status() {
        let state = AppState::new(&Config::default(), Arc::new(ScriptedClient::new(vec![])));
        assert_eq!(state.status(), SessionStatus::default());

        let mut session = state.session.lock().await;
        session.api_key = uicraft_core::ApiKey::new("gsk_typed");
        session.markup = "<p>x</p>".into();
        state.publish(&session, true);

        let status = state.status();
        assert!(status.api_key_set);
        assert!(status.has_markup);
        assert!(status.busy);
        assert_eq!(status.pending, PendingMode::None);
    }
}
