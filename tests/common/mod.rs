#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    routing::post,
};
use serde_json::Value;

use code_helper_chat::view::{ResponseView, DisplayState};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub content_type: Option<String>,
    pub body: Value,
}

type Reply = Arc<dyn Fn(&Value) -> (StatusCode, String, Duration) + Send + Sync>;

#[derive(Clone)]
struct StubState {
    requests: Arc<Mutex<Vec<Recorded>>>,
    reply: Reply,
}

/// In-process stand-in for the chat service.
pub struct StubService {
    pub base: String,
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

impl StubService {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

pub async fn spawn_stub(status: StatusCode, body: &'static str) -> StubService {
    spawn_stub_with(move |_| (status, body.to_string(), Duration::ZERO)).await
}

pub async fn spawn_stub_with<F>(reply: F) -> StubService
where
    F: Fn(&Value) -> (StatusCode, String, Duration) + Send + Sync + 'static,
{
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        requests: requests.clone(),
        reply: Arc::new(reply),
    };
    let app = Router::new().route("/chat", post(stub_chat)).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubService {
        base: format!("http://{addr}"),
        requests,
    }
}

async fn stub_chat(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, [(axum::http::HeaderName, &'static str); 1], String) {
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.requests.lock().unwrap().push(Recorded {
        content_type,
        body: body.clone(),
    });

    let (status, text, delay) = (state.reply)(&body);
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    (status, [(CONTENT_TYPE, "application/json")], text)
}

/// A base URL nothing listens on.
pub async fn dead_base() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Loading(bool),
    Shown(DisplayState),
}

/// Records every call the form handler makes on its view.
#[derive(Debug, Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ResponseView for RecordingView {
    fn set_loading(&self, loading: bool) {
        self.events.lock().unwrap().push(ViewEvent::Loading(loading));
    }

    fn show_response(&self, text: &str) {
        self.events
            .lock()
            .unwrap()
            .push(ViewEvent::Shown(DisplayState::Response(text.to_string())));
    }

    fn show_error(&self, text: &str) {
        self.events
            .lock()
            .unwrap()
            .push(ViewEvent::Shown(DisplayState::Error(text.to_string())));
    }
}
