// src/state.rs
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::services::chat_client::ChatClient;
use crate::services::chat_form::ChatForm;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    /// API base injected at startup; wins over the page's `?api=`.
    pub injected_api: Option<String>,
    pub client: ChatClient,
}

impl AppState {
    pub fn new(injected_api: Option<String>) -> Self {
        Self {
            injected_api,
            client: ChatClient::new(),
        }
    }

    /// Resolve the configuration for one page load and bind a form handler to it.
    pub fn form_for(&self, query_api: Option<&str>) -> ChatForm {
        let config = ApiConfig::resolve(self.injected_api.as_deref(), query_api);
        ChatForm::new(config, self.client.clone())
    }
}
