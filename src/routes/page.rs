// Chat form page. Server-rendered; the output region shows a settled state.

use crate::message::FormFields;
use crate::view::PageSnapshot;

/// Build the complete HTML page for the chat form.
pub fn render_page(
    api_base: &str,
    raw_query: Option<&str>,
    fields: &FormFields,
    page: &PageSnapshot,
) -> String {
    let action = match raw_query {
        Some(q) if !q.is_empty() => format!("/?{q}"),
        _ => "/".to_string(),
    };
    let disabled = if page.submit_enabled { "" } else { " disabled" };
    let class = page.display.class();

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>Code Helper Chat</title>
<link rel="stylesheet" href="/style.css">
</head>
<body>
<h1>Code Helper Chat</h1>
<p class="api">API: <code>{api}</code></p>
<form id="chat-form" method="post" action="{action}">
  <label for="message">Message</label>
  <textarea id="message" name="message" rows="4" required>{message}</textarea>
  <label for="project_path">Project path (optional)</label>
  <input id="project_path" name="project_path" type="text" value="{project_path}">
  <button id="send-btn" type="submit"{disabled}>Send</button>
</form>
<div id="response" class="{class}">{output}</div>
</body>
</html>
"##,
        api = escape_html(api_base),
        action = escape_html(&action),
        message = escape_html(&fields.message),
        project_path = escape_html(&fields.project_path),
        output = escape_html(&page.display.text()),
    )
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
