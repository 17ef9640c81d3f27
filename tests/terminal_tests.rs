mod common;

use axum::http::StatusCode;
use serde_json::json;

use code_helper_chat::config::ApiConfig;
use code_helper_chat::services::chat_client::ChatClient;
use code_helper_chat::services::chat_form::{ChatForm, Outcome, Submission};
use code_helper_chat::terminal::{absolute_project_path, chat_interactive, chat_once};
use common::{RecordingView, spawn_stub};

#[tokio::test]
async fn one_shot_chat() {
    let stub = spawn_stub(StatusCode::OK, r#"{"response": "pong"}"#).await;
    let form = ChatForm::new(ApiConfig::new(&stub.base), ChatClient::new());
    let view = RecordingView::default();

    let submission = chat_once(&form, "ping", "/repo", &view).await;
    assert_eq!(submission, Submission::Settled(Outcome::Reply("pong".into())));
    assert_eq!(
        stub.requests()[0].body,
        json!({"message": "ping", "project_path": "/repo"})
    );
}

#[tokio::test]
async fn interactive_stops_at_blank_line() {
    let stub = spawn_stub(StatusCode::OK, r#"{"response": "ok"}"#).await;
    let form = ChatForm::new(ApiConfig::new(&stub.base), ChatClient::new());
    let view = RecordingView::default();

    let input: &[u8] = b"first\nsecond\n\nnever sent\n";
    let last = chat_interactive(&form, "", input, &view).await.unwrap();

    assert_eq!(last, Some(Outcome::Reply("ok".into())));
    let sent: Vec<_> = stub
        .requests()
        .into_iter()
        .map(|r| r.body["message"].clone())
        .collect();
    assert_eq!(sent, vec![json!("first"), json!("second")]);
}

#[tokio::test]
async fn interactive_reports_last_failure() {
    let stub = spawn_stub(StatusCode::SERVICE_UNAVAILABLE, "{}").await;
    let form = ChatForm::new(ApiConfig::new(&stub.base), ChatClient::new());
    let view = RecordingView::default();

    let input: &[u8] = b"hello";
    let last = chat_interactive(&form, "", input, &view).await.unwrap();
    assert_eq!(
        last,
        Some(Outcome::Rejected {
            status: 503,
            text: "Request failed".into()
        })
    );
}

#[tokio::test]
async fn interactive_empty_input_sends_nothing() {
    let stub = spawn_stub(StatusCode::OK, r#"{"response": "ok"}"#).await;
    let form = ChatForm::new(ApiConfig::new(&stub.base), ChatClient::new());
    let view = RecordingView::default();

    let input: &[u8] = b"";
    assert_eq!(chat_interactive(&form, "", input, &view).await.unwrap(), None);
    assert!(stub.requests().is_empty());
}

#[test]
fn project_path_made_absolute() {
    assert_eq!(absolute_project_path(None), "");
    assert_eq!(absolute_project_path(Some("   ")), "");

    let abs = absolute_project_path(Some("some/dir"));
    assert!(std::path::Path::new(&abs).is_absolute());
    assert!(abs.ends_with("dir"));
}
