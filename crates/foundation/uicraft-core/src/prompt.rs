//! Prompt templates sent to the completion endpoint
//!
//! Both templates are fixed text with the user's instruction (and, for
//! modification, the current markup) spliced in verbatim.

/// Stylesheet loader every generated document must carry
pub const TAILWIND_LOADER: &str = r#"<script src="https://cdn.tailwindcss.com"></script>"#;

/// Prompt for a brand new design
pub fn build_generate_prompt(user_text: &str) -> String {
    format!(
        r#"
You are an AI reasoning agent.

Your output must follow this format:
Question: {{prompt}}
Thought: (think step-by-step silently and DO NOT show this to the user)
Final Answer: (output ONLY valid HTML with TailwindCSS)

RULES:
- MUST include {loader}
- NO markdown, NO explanation, NO comments
- NO headings like "Final Answer:", output ONLY the HTML

Question: {user_text}
"#,
        loader = TAILWIND_LOADER,
        user_text = user_text,
    )
}

/// Prompt for changing the current design
pub fn build_modify_prompt(current_markup: &str, user_text: &str) -> String {
    format!(
        r#"
You are an AI reasoning agent.

Thought: (think silently and DO NOT show this to the user)
Final Answer: (output ONLY updated HTML)

RULES:
- Keep existing UI unless change is requested
- MUST retain {loader}
- NO markdown, NO comments, NO explanation
- NO headings like "Final Answer:", output ONLY the updated HTML

Existing HTML:
{current_markup}

Modify based on:
{user_text}
"#,
        loader = TAILWIND_LOADER,
        current_markup = current_markup,
        user_text = user_text,
    )
}
