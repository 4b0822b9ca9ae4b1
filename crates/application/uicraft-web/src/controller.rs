//! Page controller
//!
//! Every browser interaction is one refresh cycle:
//!
//! ```text
//!   widget values ──> apply_inputs ──> press(action) ──> refresh ──> render
//!                     (key, edits)     (pending=new|     (prompt -> client
//!                                       update)           -> state, pending=none)
//! ```
//!
//! `pending` is always `None` when a cycle ends.

use serde::Deserialize;
use uicraft_core::{
    build_generate_prompt, build_modify_prompt, ActionError, ApiKey, Operation, PendingMode,
    SessionState, ViewMode,
};
use uicraft_groq::{CompletionClient, CompletionRequest};

/// Button pressed on this request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Generate,
    Update,
}

/// Widget values submitted with every interaction
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageInput {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub prompt: String,
    /// Absent when the markup editor was not part of the submission
    #[serde(default)]
    pub markup: Option<String>,
    #[serde(default)]
    pub view_mode: Option<String>,
    #[serde(default)]
    pub action: Option<Action>,
}

impl PageInput {
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
            .as_deref()
            .and_then(|mode| mode.parse::<ViewMode>().ok())
            .unwrap_or_default()
    }
}

/// What a refresh did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Nothing was pending
    Idle,
    /// Markup replaced by a completion
    Updated,
    Failed(ActionError),
}

/// Drives the session state machine against a completion client
pub struct Controller<'a> {
    client: &'a dyn CompletionClient,
    model: &'a str,
    temperature: f32,
}

impl<'a> Controller<'a> {
    pub fn new(client: &'a dyn CompletionClient, model: &'a str, temperature: f32) -> Self {
        Self {
            client,
            model,
            temperature,
        }
    }

    /// Run one full cycle for a submission
    pub async fn handle(&self, state: &mut SessionState, input: &PageInput) -> RefreshOutcome {
        apply_inputs(state, input);
        if let Some(action) = input.action {
            if let Err(e) = press(state, action, &input.prompt) {
                return RefreshOutcome::Failed(e);
            }
        }
        self.refresh(state).await
    }

    /// Execute whatever is pending. `pending` is `None` afterwards, whatever happened.
    pub async fn refresh(&self, state: &mut SessionState) -> RefreshOutcome {
        match state.take_pending() {
            PendingMode::None => RefreshOutcome::Idle,
            PendingMode::New => {
                let prompt = build_generate_prompt(&state.prompt);
                self.run(state, Operation::Generate, prompt).await
            }
            PendingMode::Update => {
                if !state.has_markup() {
                    return fail(state, ActionError::NoDesignToUpdate);
                }
                let prompt = build_modify_prompt(&state.markup, &state.prompt);
                self.run(state, Operation::Update, prompt).await
            }
        }
    }

    async fn run(
        &self,
        state: &mut SessionState,
        operation: Operation,
        prompt: String,
    ) -> RefreshOutcome {
        if !state.has_api_key() {
            return fail(state, ActionError::MissingApiKey);
        }

        let request = CompletionRequest::new(
            self.model,
            self.temperature,
            state.api_key.expose(),
            prompt,
        );

        tracing::info!(%operation, client = self.client.name(), "running completion");

        match self.client.complete(&request).await {
            Ok(markup) => {
                state.clear_alert();
                state.markup = markup;
                RefreshOutcome::Updated
            }
            Err(e) => fail(state, e.into_action_error(operation)),
        }
    }
}

/// Copy widget values into the session. Returns true when the markup was edited.
pub fn apply_inputs(state: &mut SessionState, input: &PageInput) -> bool {
    let key = input.api_key.trim();
    if !key.is_empty() {
        state.api_key = ApiKey::new(key);
    }

    let Some(submitted) = input.markup.as_deref() else {
        return false;
    };
    // Browsers submit textarea content with CRLF line breaks
    let submitted = submitted.replace("\r\n", "\n");
    if submitted == state.markup.replace("\r\n", "\n") {
        return false;
    }

    tracing::debug!(len = submitted.len(), "markup edited by hand");
    state.markup = submitted;
    true
}

/// Handle a button press. Without an API key nothing is queued and a warning is shown.
pub fn press(state: &mut SessionState, action: Action, prompt: &str) -> Result<(), ActionError> {
    if !state.has_api_key() {
        let err = ActionError::MissingApiKey;
        state.set_alert(err.to_string(), err.level());
        return Err(err);
    }

    state.pending = match action {
        Action::Generate => PendingMode::New,
        Action::Update => PendingMode::Update,
    };
    state.prompt = prompt.to_string();
    Ok(())
}

fn fail(state: &mut SessionState, err: ActionError) -> RefreshOutcome {
    tracing::warn!("{}", err);
    state.set_alert(err.to_string(), err.level());
    RefreshOutcome::Failed(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedClient;
    use uicraft_core::AlertLevel;
    use uicraft_groq::CompletionError;

    const MODEL: &str = "openai/gpt-oss-safeguard-20b";

    fn keyed() -> SessionState {
        SessionState::with_api_key("gsk_test")
    }

    #[test]
    fn test_generate_without_key_warns() {
        let mut state = SessionState::new();
        let result = press(&mut state, Action::Generate, "a pricing table");

        assert_eq!(result, Err(ActionError::MissingApiKey));
        assert_eq!(state.pending, PendingMode::None);
        assert!(state.prompt.is_empty());
        let alert = state.alert.as_ref().unwrap();
        assert_eq!(alert.level, AlertLevel::Warning);
        assert!(alert.message.contains("API key"));
    }

    #[test]
    fn test_generate_with_key_queues() {
        let mut state = keyed();
        press(&mut state, Action::Generate, "a pricing table").unwrap();
        assert_eq!(state.pending, PendingMode::New);
        assert_eq!(state.prompt, "a pricing table");

        press(&mut state, Action::Update, "make it blue").unwrap();
        assert_eq!(state.pending, PendingMode::Update);
        assert_eq!(state.prompt, "make it blue");
    }

    #[tokio::test]
    async fn test_refresh_success_replaces_markup_and_clears_alert() {
        let client = ScriptedClient::new(vec![Ok("<html>new</html>".into())]);
        let controller = Controller::new(&client, MODEL, 0.2);

        let mut state = keyed();
        state.set_alert("old problem", AlertLevel::Error);
        press(&mut state, Action::Generate, "a hero section").unwrap();

        let outcome = controller.refresh(&mut state).await;

        assert_eq!(outcome, RefreshOutcome::Updated);
        assert_eq!(state.markup, "<html>new</html>");
        assert!(state.alert.is_none());
        assert_eq!(state.pending, PendingMode::None);

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].model, MODEL);
        assert_eq!(calls[0].temperature, 0.2);
        assert_eq!(calls[0].api_key, "gsk_test");
        assert!(calls[0].prompt.contains("Question: a hero section"));
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_markup() {
        let client = ScriptedClient::new(vec![Err(CompletionError::Provider("rate limited".into()))]);
        let controller = Controller::new(&client, MODEL, 0.2);

        let mut state = keyed();
        state.markup = "<p>before</p>".into();
        press(&mut state, Action::Generate, "anything").unwrap();

        let outcome = controller.refresh(&mut state).await;

        assert!(matches!(outcome, RefreshOutcome::Failed(ActionError::Provider { .. })));
        assert_eq!(state.markup, "<p>before</p>");
        assert_eq!(state.pending, PendingMode::None);
        let alert = state.alert.as_ref().unwrap();
        assert_eq!(alert.level, AlertLevel::Error);
        assert_eq!(alert.message, "Error generating UI: rate limited");
    }

    #[tokio::test]
    async fn test_invalid_key_alert() {
        let client = ScriptedClient::new(vec![Err(CompletionError::InvalidApiKey)]);
        let controller = Controller::new(&client, MODEL, 0.2);

        let mut state = keyed();
        state.markup = "<p>x</p>".into();
        press(&mut state, Action::Update, "tweak").unwrap();
        controller.refresh(&mut state).await;

        let alert = state.alert.as_ref().unwrap();
        assert_eq!(alert.level, AlertLevel::Error);
        assert_eq!(alert.message, "Invalid Groq API key. Please check and try again.");
    }

    #[tokio::test]
    async fn test_update_without_markup_skips_call() {
        let client = ScriptedClient::new(vec![]);
        let controller = Controller::new(&client, MODEL, 0.2);

        let mut state = keyed();
        press(&mut state, Action::Update, "make it blue").unwrap();
        let outcome = controller.refresh(&mut state).await;

        assert_eq!(outcome, RefreshOutcome::Failed(ActionError::NoDesignToUpdate));
        assert_eq!(client.calls().len(), 0);
        assert_eq!(state.pending, PendingMode::None);
        assert_eq!(state.alert.as_ref().unwrap().level, AlertLevel::Warning);
    }

    #[tokio::test]
    async fn test_update_sends_current_markup() {
        let client = ScriptedClient::new(vec![Ok("<p>blue</p>".into())]);
        let controller = Controller::new(&client, MODEL, 0.2);

        let mut state = keyed();
        state.markup = "<p>red</p>".into();
        press(&mut state, Action::Update, "make it blue").unwrap();
        controller.refresh(&mut state).await;

        let calls = client.calls();
        assert!(calls[0].prompt.contains("Existing HTML:\n<p>red</p>"));
        assert!(calls[0].prompt.contains("make it blue"));
        assert_eq!(state.markup, "<p>blue</p>");
    }

    #[tokio::test]
    async fn test_idle_refresh_does_nothing() {
        let client = ScriptedClient::new(vec![]);
        let controller = Controller::new(&client, MODEL, 0.2);

        let mut state = keyed();
        state.set_alert("still here", AlertLevel::Success);
        assert_eq!(controller.refresh(&mut state).await, RefreshOutcome::Idle);
        assert!(state.alert.is_some());
        assert_eq!(client.calls().len(), 0);
    }

    #[tokio::test]
    async fn test_manual_edit_without_completion() {
        let client = ScriptedClient::new(vec![]);
        let controller = Controller::new(&client, MODEL, 0.2);

        let mut state = keyed();
        state.markup = "<p>one</p>".into();
        let input = PageInput {
            markup: Some("<p>two</p>\r\n<p>three</p>".into()),
            ..PageInput::default()
        };

        let outcome = controller.handle(&mut state, &input).await;

        assert_eq!(outcome, RefreshOutcome::Idle);
        assert_eq!(state.markup, "<p>two</p>\n<p>three</p>");
        assert_eq!(client.calls().len(), 0);
    }

    #[tokio::test]
    async fn test_edit_applies_before_update() {
        let client = ScriptedClient::new(vec![Ok("<p>done</p>".into())]);
        let controller = Controller::new(&client, MODEL, 0.2);

        let mut state = keyed();
        state.markup = "<p>generated</p>".into();
        let input = PageInput {
            prompt: "add a footer".into(),
            markup: Some("<p>hand edited</p>".into()),
            action: Some(Action::Update),
            ..PageInput::default()
        };

        controller.handle(&mut state, &input).await;

        assert!(client.calls()[0].prompt.contains("<p>hand edited</p>"));
        assert_eq!(state.markup, "<p>done</p>");
    }

    #[test]
    fn test_sidebar_key_overrides_and_blank_keeps() {
        let mut state = SessionState::with_api_key("from_env");

        apply_inputs(&mut state, &PageInput { api_key: "  ".into(), ..PageInput::default() });
        assert_eq!(state.api_key.expose(), "from_env");

        apply_inputs(&mut state, &PageInput { api_key: " typed ".into(), ..PageInput::default() });
        assert_eq!(state.api_key.expose(), "typed");
    }

    #[tokio::test]
    async fn test_handle_press_without_key_makes_no_call() {
        let client = ScriptedClient::new(vec![]);
        let controller = Controller::new(&client, MODEL, 0.2);

        let mut state = SessionState::new();
        let input = PageInput {
            prompt: "a navbar".into(),
            action: Some(Action::Generate),
            ..PageInput::default()
        };

        assert_eq!(
            controller.handle(&mut state, &input).await,
            RefreshOutcome::Failed(ActionError::MissingApiKey)
        );
        assert_eq!(client.calls().len(), 0);
        assert_eq!(state.alert.as_ref().unwrap().level, AlertLevel::Warning);
        assert_eq!(state.pending, PendingMode::None);
    }

    #[test]
    fn test_crlf_markup_survives_resubmission() {
        let stored = "<p>a</p>\r\n<p>b</p>";
        let mut state = keyed();
        state.markup = stored.into();

        // Radio toggle echoes the editor content back unchanged
        let input = PageInput {
            markup: Some(stored.into()),
            view_mode: Some("mobile".into()),
            ..PageInput::default()
        };
        assert!(!apply_inputs(&mut state, &input));
        assert_eq!(state.markup, stored);

        // Same text with LF breaks only is still not an edit
        let input = PageInput {
            markup: Some("<p>a</p>\n<p>b</p>".into()),
            ..PageInput::default()
        };
        assert!(!apply_inputs(&mut state, &input));
        assert_eq!(state.markup, stored);

        let input = PageInput {
            markup: Some("<p>a</p>\r\n<p>c</p>".into()),
            ..PageInput::default()
        };
        assert!(apply_inputs(&mut state, &input));
        assert_eq!(state.markup, "<p>a</p>\n<p>c</p>");
    }

    #[test]
    fn test_view_mode_default() {
        assert_eq!(PageInput::default().view_mode(), ViewMode::Desktop);
        let input = PageInput { view_mode: Some("mobile".into()), ..PageInput::default() };
        assert_eq!(input.view_mode(), ViewMode::Mobile);
    }
}
