//! Session state for one interactive session

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Action queued by a button press, executed on the next refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PendingMode {
    #[default]
    None,
    New,
    Update,
}

impl PendingMode {
    pub fn is_pending(&self) -> bool {
        !matches!(self, PendingMode::None)
    }
}

impl fmt::Display for PendingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::New => write!(f, "new"),
            Self::Update => write!(f, "update"),
        }
    }
}

/// Severity of the alert banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    #[default]
    Error,
    Warning,
    Success,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Success => "success",
        }
    }
}

/// The single user-facing status message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub message: String,
    pub level: AlertLevel,
}

impl Alert {
    pub fn new(message: impl Into<String>, level: AlertLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }
}

/// Preview frame layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Desktop,
    Mobile,
}

/// View mode name that is neither desktop nor mobile
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view mode: {0}")]
pub struct UnknownViewMode(pub String);

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "desktop" => Ok(ViewMode::Desktop),
            "mobile" => Ok(ViewMode::Mobile),
            _ => Err(UnknownViewMode(s.to_string())),
        }
    }
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Desktop => "Desktop",
            Self::Mobile => "Mobile",
        }
    }

    pub fn all() -> [Self; 2] {
        [ViewMode::Desktop, ViewMode::Mobile]
    }
}

/// Provider API key. Never printed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "ApiKey(<unset>)")
        } else {
            write!(f, "ApiKey(<redacted>)")
        }
    }
}

/// Mutable record owned by the session. One writer at a time.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Current HTML document, generated or hand-edited
    pub markup: String,
    /// Prompt captured at the last button press
    pub prompt: String,
    /// Action waiting for the next refresh
    pub pending: PendingMode,
    pub api_key: ApiKey,
    pub alert: Option<Alert>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with a key supplied by the environment
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: ApiKey::new(api_key),
            ..Self::default()
        }
    }

    /// Overwrite the current alert. There is no queue.
    pub fn set_alert(&mut self, message: impl Into<String>, level: AlertLevel) {
        self.alert = Some(Alert::new(message, level));
    }

    pub fn clear_alert(&mut self) {
        self.alert = None;
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn has_markup(&self) -> bool {
        !self.markup.is_empty()
    }

    /// Take the pending mode, leaving `None` behind
    pub fn take_pending(&mut self) -> PendingMode {
        std::mem::take(&mut self.pending)
    }
}
