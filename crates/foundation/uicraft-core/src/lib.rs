//! uicraft core
//!
//! Everything the generator needs that does not touch the network or the
//! browser:
//!
//! - **Session state**: current markup, stored prompt, pending mode, API key, alert
//! - **Prompt templates**: generate-new and modify-existing
//! - **Action errors**: the user-facing failure taxonomy and its alert levels

pub mod error;
pub mod prompt;
pub mod session;

pub use error::{ActionError, Operation};
pub use prompt::{build_generate_prompt, build_modify_prompt, TAILWIND_LOADER};
pub use session::{Alert, AlertLevel, ApiKey, PendingMode, SessionState, UnknownViewMode, ViewMode};

/// Model used for every completion unless configured otherwise.
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-safeguard-20b";

/// Sampling temperature used for every completion unless configured otherwise.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// File name offered by the download action.
pub const DOWNLOAD_FILE_NAME: &str = "generated_ui.html";
