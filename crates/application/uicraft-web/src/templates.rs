//! HTML templates for the generator page
//!
//! One form holds every widget. HTMX posts it to `/interact` on each button
//! press or edit and swaps `#app` with the re-rendered state.

use crate::alert::render_alert;
use crate::preview;
use uicraft_core::{SessionState, ViewMode, DOWNLOAD_FILE_NAME};

/// Widget values that live in the browser rather than the session
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub prompt_draft: String,
    pub view_mode: ViewMode,
}

/// CSS styles
pub const STYLE_CSS: &str = r#"
:root {
    --bg-primary: #0e1117;
    --bg-secondary: #161a23;
    --bg-tertiary: #1f2430;
    --accent: #ff4b4b;
    --text-primary: #fafafa;
    --text-secondary: #9ca3af;
    --border: #2d3340;
    --danger: #ff6b6b;
    --warning: #ffbd45;
    --success: #21c354;
    --info: #3d9df3;
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: 'Source Sans Pro', system-ui, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
    min-height: 100vh;
    line-height: 1.5;
}

.layout {
    display: grid;
    grid-template-columns: 280px 1fr;
    min-height: 100vh;
}

/* Sidebar */
.sidebar {
    background: var(--bg-secondary);
    border-right: 1px solid var(--border);
    padding: 24px 16px;
}

.sidebar h3 {
    font-size: 1em;
    margin-bottom: 12px;
}

.key-status {
    font-size: 0.85em;
    color: var(--text-secondary);
    margin-top: 6px;
}

.key-status.set {
    color: var(--success);
}

/* Main */
.main {
    padding: 24px 32px;
}

.main h1 {
    font-size: 2em;
    margin-bottom: 16px;
}

.columns {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 32px;
}

.columns h2 {
    font-size: 1.3em;
    margin: 16px 0 8px;
}

label {
    display: block;
    font-size: 0.9em;
    color: var(--text-secondary);
    margin-bottom: 4px;
}

input[type=password], textarea {
    width: 100%;
    background: var(--bg-tertiary);
    color: var(--text-primary);
    border: 1px solid var(--border);
    border-radius: 6px;
    padding: 8px 10px;
    font-family: inherit;
}

textarea.code {
    font-family: 'JetBrains Mono', 'Fira Code', monospace;
    font-size: 0.85em;
}

.btn {
    display: inline-block;
    margin: 8px 8px 0 0;
    padding: 8px 16px;
    background: var(--bg-tertiary);
    color: var(--text-primary);
    border: 1px solid var(--border);
    border-radius: 6px;
    cursor: pointer;
    text-decoration: none;
    font-size: 0.95em;
}

.btn:hover {
    border-color: var(--accent);
    color: var(--accent);
}

.radio-row {
    display: flex;
    gap: 16px;
    margin-bottom: 12px;
}

.radio-row label {
    display: inline-flex;
    gap: 6px;
    color: var(--text-primary);
}

/* Alerts */
.alert {
    padding: 12px 16px;
    border-radius: 6px;
    margin-bottom: 16px;
}

.alert-error {
    background: rgba(255, 107, 107, 0.15);
    color: var(--danger);
}

.alert-warning {
    background: rgba(255, 189, 69, 0.15);
    color: var(--warning);
}

.alert-success {
    background: rgba(33, 195, 84, 0.15);
    color: var(--success);
}

.info-box {
    padding: 12px 16px;
    border-radius: 6px;
    background: rgba(61, 157, 243, 0.15);
    color: var(--info);
}

.preview-frame {
    background: #fff;
    border-radius: 6px;
}

.htmx-indicator {
    display: none;
    color: var(--text-secondary);
    margin-left: 8px;
}

.htmx-request .htmx-indicator,
.htmx-request.htmx-indicator {
    display: inline;
}
"#;

/// Full page for direct loads and non-HTMX form posts
pub fn page_html(state: &SessionState, view: &PageView) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>AI - Custom UI Generator</title>
    <link rel=\"stylesheet\" href=\"/static/style.css\">
    <script src=\"https://unpkg.com/htmx.org@1.9.10\"></script>
</head>
<body>
{}
</body>
</html>",
        app_html(state, view)
    )
}

/// The swappable body: sidebar, alert, editor and preview
pub fn app_html(state: &SessionState, view: &PageView) -> String {
    let key_status = if state.has_api_key() {
        "<div class=\"key-status set\">Key set for this session</div>"
    } else {
        "<div class=\"key-status\">No key set</div>"
    };

    let download = if state.has_markup() {
        format!(
            "<a class=\"btn\" href=\"/download\" download=\"{0}\">Download HTML File</a>",
            DOWNLOAD_FILE_NAME
        )
    } else {
        String::new()
    };

    let view_radios: String = ViewMode::all()
        .iter()
        .map(|mode| {
            format!(
                "<label><input type=\"radio\" name=\"view_mode\" value=\"{}\"{} \
                 hx-post=\"/interact\" hx-trigger=\"change\"> {}</label>",
                mode.as_str(),
                if *mode == view.view_mode { " checked" } else { "" },
                mode.label()
            )
        })
        .collect();

    let preview = preview::render(&state.markup, view.view_mode).to_html();

    // The newline after <textarea> is swallowed by the HTML parser, so a
    // leading newline in the content survives the round trip.
    format!(
        "<div id=\"app\">
<form class=\"layout\" method=\"post\" action=\"/interact\"
      hx-post=\"/interact\" hx-target=\"#app\" hx-swap=\"outerHTML\" hx-indicator=\"#busy\">
    <aside class=\"sidebar\">
        <h3>Enter your Groq API Key (required)</h3>
        <label for=\"api_key\">Groq API Key</label>
        <input type=\"password\" id=\"api_key\" name=\"api_key\" autocomplete=\"off\" value=\"\">
        {key_status}
    </aside>

    <main class=\"main\">
        <h1>AI - Custom UI Generator</h1>
        {alert}
        <div class=\"columns\">
            <section>
                <h2>Prompt</h2>
                <label for=\"prompt\">Describe your UI:</label>
                <textarea id=\"prompt\" name=\"prompt\" rows=\"6\">
{prompt}</textarea>
                <button class=\"btn\" type=\"submit\" name=\"action\" value=\"generate\">Generate New</button>
                <button class=\"btn\" type=\"submit\" name=\"action\" value=\"update\">Update Current</button>
                <span id=\"busy\" class=\"htmx-indicator\">Working...</span>

                <h2>HTML Code</h2>
                <label for=\"markup\">HTML Output</label>
                <textarea class=\"code\" id=\"markup\" name=\"markup\" rows=\"18\"
                          hx-post=\"/interact\" hx-trigger=\"change\">
{markup}</textarea>
                {download}
            </section>

            <section>
                <h2>Preview</h2>
                <div class=\"radio-row\">{view_radios}</div>
                <div id=\"preview\">{preview}</div>
            </section>
        </div>
    </main>
</form>
</div>",
        key_status = key_status,
        alert = render_alert(state.alert.as_ref()),
        prompt = html_escape(&view.prompt_draft),
        markup = html_escape(&state.markup),
        download = download,
        view_radios = view_radios,
        preview = preview,
    )
}

/// HTML-escape text for element content and quoted attributes
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
