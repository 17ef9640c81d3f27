// src/services/chat_form.rs
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::message::FormFields;
use crate::services::chat_client::ChatClient;
use crate::view::ResponseView;

pub const REQUEST_FAILED: &str = "Request failed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Success status; text is the `response` field, possibly empty.
    Reply(String),
    /// Failure status from the service.
    Rejected { status: u16, text: String },
    /// No response at all.
    Unreachable(String),
}

impl Outcome {
    pub fn is_reply(&self) -> bool {
        matches!(self, Outcome::Reply(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank message: nothing sent, view untouched.
    Skipped,
    Settled(Outcome),
}

/// Handles one form submission at a time against a fixed API base.
///
/// Overlapping submissions sharing a view are not guarded: each one
/// overwrites the output when it settles.
#[derive(Debug, Clone)]
pub struct ChatForm {
    config: ApiConfig,
    client: ChatClient,
}

impl ChatForm {
    pub fn new(config: ApiConfig, client: ChatClient) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn submit(&self, fields: &FormFields, view: &dyn ResponseView) -> Submission {
        let Some(request) = fields.to_request() else {
            debug!("blank message, nothing to send");
            return Submission::Skipped;
        };

        let url = self.config.chat_url();
        let span = info_span!("submission", id = %Uuid::new_v4(), %url);

        async {
            view.set_loading(true);
            info!(has_project_path = request.project_path.is_some(), "sending chat message");

            let outcome = match self.client.post_chat(&url, &request).await {
                Ok(reply) if reply.status.is_success() => {
                    let text = reply.body.text("response").unwrap_or_default();
                    view.show_response(&text);
                    Outcome::Reply(text)
                }
                Ok(reply) => {
                    let text = reply
                        .body
                        .error_text()
                        .unwrap_or_else(|| REQUEST_FAILED.to_string());
                    warn!(status = %reply.status, error = %text, "chat request rejected");
                    view.show_error(&text);
                    Outcome::Rejected {
                        status: reply.status.as_u16(),
                        text,
                    }
                }
                Err(e) => {
                    let text = e.user_message();
                    warn!(error = %text, "chat service unreachable");
                    view.show_error(&text);
                    Outcome::Unreachable(text)
                }
            };

            view.set_loading(false);
            Submission::Settled(outcome)
        }
        .instrument(span)
        .await
    }
}
