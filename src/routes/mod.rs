// src/routes/mod.rs
pub mod chat;
pub mod page;

use crate::state::SharedState;
use axum::{Router, routing::get};
use chat::{chat_page_handler, chat_submit_handler};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(chat_page_handler).post(chat_submit_handler))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}
