//! Alert banner at the top of the page

use crate::templates::html_escape;
use uicraft_core::{Alert, AlertLevel};

/// One banner for the current alert, or nothing. Does not clear the alert.
pub fn render_alert(alert: Option<&Alert>) -> String {
    let Some(alert) = alert else {
        return String::new();
    };

    let icon = match alert.level {
        AlertLevel::Error => "&#10006;",
        AlertLevel::Warning => "&#9888;",
        AlertLevel::Success => "&#10004;",
    };

    format!(
        "<div class=\"alert alert-{}\" role=\"alert\"><span class=\"alert-icon\">{}</span> {}</div>",
        alert.level.as_str(),
        icon,
        html_escape(alert.message.trim())
    )
}
