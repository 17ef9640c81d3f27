// src/view.rs
use std::io::{self, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

pub const LOADING_TEXT: &str = "Sending…";
pub const EMPTY_RESPONSE_TEXT: &str = "(empty response)";

/// The output region plus the submit control, as seen by the form handler.
pub trait ResponseView: Send + Sync {
    /// `true` disables the submit control and shows the loading indicator.
    /// `false` re-enables it; a settled result stays on screen.
    fn set_loading(&self, loading: bool);

    fn show_response(&self, text: &str);

    fn show_error(&self, text: &str);
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum DisplayState {
    #[default]
    Idle,
    Loading,
    Response(String),
    Error(String),
}

impl DisplayState {
    pub fn text(&self) -> String {
        match self {
            DisplayState::Idle => String::new(),
            DisplayState::Loading => LOADING_TEXT.to_string(),
            DisplayState::Response(t) if t.is_empty() => EMPTY_RESPONSE_TEXT.to_string(),
            DisplayState::Response(t) => t.clone(),
            DisplayState::Error(t) => format!("Error: {t}"),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            DisplayState::Loading => "loading",
            DisplayState::Error(_) => "error",
            DisplayState::Idle | DisplayState::Response(_) => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    pub display: DisplayState,
    pub submit_enabled: bool,
}

impl Default for PageSnapshot {
    fn default() -> Self {
        Self {
            display: DisplayState::Idle,
            submit_enabled: true,
        }
    }
}

/// In-memory output region, rendered into HTML by the page server.
#[derive(Debug, Default)]
pub struct PageView {
    inner: Mutex<PageSnapshot>,
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PageSnapshot> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ResponseView for PageView {
    fn set_loading(&self, loading: bool) {
        let mut page = self.lock();
        page.submit_enabled = !loading;
        if loading {
            page.display = DisplayState::Loading;
        } else if page.display == DisplayState::Loading {
            page.display = DisplayState::Idle;
        }
    }

    fn show_response(&self, text: &str) {
        self.lock().display = DisplayState::Response(text.to_string());
    }

    fn show_error(&self, text: &str) {
        self.lock().display = DisplayState::Error(text.to_string());
    }
}

/// Terminal rendering: indicator on stderr, replies on stdout, errors on stderr.
#[derive(Debug, Default)]
pub struct TerminalView {
    indicator: AtomicBool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    fn clear_indicator(&self) {
        if self.indicator.swap(false, Ordering::SeqCst) {
            let mut err = io::stderr().lock();
            let _ = write!(err, "\r{}\r", " ".repeat(LOADING_TEXT.chars().count()));
            let _ = err.flush();
        }
    }
}

impl ResponseView for TerminalView {
    fn set_loading(&self, loading: bool) {
        if loading {
            let mut err = io::stderr().lock();
            let _ = write!(err, "{LOADING_TEXT}");
            let _ = err.flush();
            self.indicator.store(true, Ordering::SeqCst);
        } else {
            self.clear_indicator();
        }
    }

    fn show_response(&self, text: &str) {
        self.clear_indicator();
        println!("{}", DisplayState::Response(text.to_string()).text());
    }

    fn show_error(&self, text: &str) {
        self.clear_indicator();
        eprintln!("{}", DisplayState::Error(text.to_string()).text());
    }
}
