// src/terminal.rs
use std::path::Path;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::message::FormFields;
use crate::services::chat_form::{ChatForm, Outcome, Submission};
use crate::view::ResponseView;

pub const BANNER: &str = "Chat with code-helper (empty line or Ctrl+D to quit)";

/// Absolute form of a non-blank project path; blank stays blank.
pub fn absolute_project_path(path: Option<&str>) -> String {
    let Some(path) = path.map(str::trim).filter(|p| !p.is_empty()) else {
        return String::new();
    };
    match std::path::absolute(Path::new(path)) {
        Ok(abs) => abs.to_string_lossy().into_owned(),
        Err(_) => path.to_string(),
    }
}

pub async fn chat_once(
    form: &ChatForm,
    message: &str,
    project_path: &str,
    view: &dyn ResponseView,
) -> Submission {
    form.submit(&FormFields::new(message, project_path), view).await
}

/// Submit each input line until a blank line or end of input. Returns the
/// outcome of the last submission, if any.
pub async fn chat_interactive<R>(
    form: &ChatForm,
    project_path: &str,
    input: R,
    view: &dyn ResponseView,
) -> std::io::Result<Option<Outcome>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut last = None;
    loop {
        eprint!("> ");
        let Some(line) = lines.next_line().await? else {
            debug!("end of input");
            break;
        };
        match chat_once(form, &line, project_path, view).await {
            Submission::Skipped => break,
            Submission::Settled(outcome) => last = Some(outcome),
        }
    }
    Ok(last)
}
