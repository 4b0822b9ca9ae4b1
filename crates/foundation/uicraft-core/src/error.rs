//! User-facing failures of the generate/update actions

use crate::session::AlertLevel;
use std::fmt;
use thiserror::Error;

/// Which completion was attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Generate,
    Update,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generate => write!(f, "generating"),
            Self::Update => write!(f, "updating"),
        }
    }
}

/// Every failure is recovered locally and shown as the page alert.
/// The `Display` text is the alert message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("Please enter your Groq API key in the sidebar before generating or updating UI.")]
    MissingApiKey,

    #[error("Invalid Groq API key. Please check and try again.")]
    InvalidApiKey,

    #[error("Error {operation} UI: {detail}")]
    Provider { operation: Operation, detail: String },

    #[error("No design to update. Generate one first.")]
    NoDesignToUpdate,
}

impl ActionError {
    pub fn level(&self) -> AlertLevel {
        match self {
            Self::MissingApiKey | Self::NoDesignToUpdate => AlertLevel::Warning,
            Self::InvalidApiKey | Self::Provider { .. } => AlertLevel::Error,
        }
    }
}
