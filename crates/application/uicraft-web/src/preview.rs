//! Live preview of the current markup
//!
//! The markup gets a small script appended that cancels anchor clicks, then
//! goes into a sandboxed `<iframe srcdoc>`, either full width or inside a
//! phone-sized frame.

use crate::templates::html_escape;
use uicraft_core::ViewMode;

pub const PREVIEW_HEIGHT_PX: u32 = 700;
pub const MOBILE_WIDTH_PX: u32 = 390;
pub const PLACEHOLDER: &str = "Generate a design to preview it here.";

/// Cancels navigation for every link once the preview document has loaded
pub const DISABLE_LINKS_SCRIPT: &str = r#"
<script>
document.addEventListener("DOMContentLoaded", () => {
    document.querySelectorAll("a").forEach(a => {
        a.addEventListener("click", event => event.preventDefault());
    });
});
</script>
"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// Nothing generated yet
    Placeholder(&'static str),
    Frame {
        document: String,
        height: u32,
        scrolling: bool,
    },
}

/// Build the preview for `markup` in the given layout
pub fn render(markup: &str, view_mode: ViewMode) -> Preview {
    if markup.is_empty() {
        return Preview::Placeholder(PLACEHOLDER);
    }

    let combined = format!("{}{}", markup, DISABLE_LINKS_SCRIPT);
    let document = match view_mode {
        ViewMode::Desktop => combined,
        ViewMode::Mobile => mobile_frame(&combined),
    };

    Preview::Frame {
        document,
        height: PREVIEW_HEIGHT_PX,
        scrolling: true,
    }
}

fn mobile_frame(content: &str) -> String {
    format!(
        r#"
<div style="
    width: {width}px;
    margin: auto;
    border: 1px solid #444;
    border-radius: 14px;
    overflow: hidden;
    box-shadow: 0 0 10px rgba(0,0,0,.35);
">
    {content}
</div>
"#,
        width = MOBILE_WIDTH_PX,
        content = content,
    )
}

impl Preview {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Preview::Placeholder(_))
    }

    /// Embed into the page
    pub fn to_html(&self) -> String {
        match self {
            Preview::Placeholder(message) => {
                format!("<div class=\"info-box\">{}</div>", html_escape(message))
            }
            Preview::Frame {
                document,
                height,
                scrolling,
            } => format!(
                "<iframe class=\"preview-frame\" title=\"Preview\" sandbox=\"allow-scripts\" \
                 scrolling=\"{}\" style=\"width: 100%; height: {}px; border: none;\" srcdoc=\"{}\"></iframe>",
                if *scrolling { "yes" } else { "no" },
                height,
                html_escape(document)
            ),
        }
    }
}
