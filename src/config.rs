// src/config.rs
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const API_ENV: &str = "CODE_HELPER_API";
/// Older name for the API base, still honoured by the terminal command.
pub const LEGACY_API_ENV: &str = "CODE_HELPER_API_URL";
pub const ADDR_ENV: &str = "CHAT_UI_ADDR";
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Where the chat service lives. Built once per page load, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base: String,
}

impl ApiConfig {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Injected value first, then the page's `?api=` parameter, then the default.
    /// Empty values are skipped.
    pub fn resolve(injected: Option<&str>, query_api: Option<&str>) -> Self {
        let base = [injected, query_api]
            .into_iter()
            .flatten()
            .find(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE);
        Self::new(base)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `{base}/chat`, with at most one trailing slash removed from the base.
    pub fn chat_url(&self) -> String {
        let base = self.base.strip_suffix('/').unwrap_or(&self.base);
        format!("{base}/chat")
    }
}

/// Injected API base for the terminal command: `--api` / `CODE_HELPER_API`,
/// then `CODE_HELPER_API_URL`.
pub fn terminal_api_base(api: Option<String>, legacy: Option<String>) -> Option<String> {
    api.into_iter()
        .chain(legacy)
        .find(|v| !v.is_empty())
}
