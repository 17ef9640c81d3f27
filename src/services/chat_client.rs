// src/services/chat_client.rs
use reqwest::{Client, StatusCode, header::CONTENT_TYPE};

use crate::error::ClientError;
use crate::message::{ChatRequest, ReplyBody};

/// Status and parsed body of a completed exchange.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub status: StatusCode,
    pub body: ReplyBody,
}

/// Thin wrapper over a pooled `reqwest::Client`. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct ChatClient {
    http: Client,
}

impl ChatClient {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }

    /// POST `request` as JSON. The body is parsed leniently; only transport
    /// failures are errors.
    pub async fn post_chat(&self, url: &str, request: &ChatRequest) -> Result<ChatReply, ClientError> {
        let res = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = res.status();
        // A body that cannot be read counts the same as one that cannot be parsed.
        let bytes = res.bytes().await.unwrap_or_default();
        Ok(ChatReply {
            status,
            body: ReplyBody::parse(&bytes),
        })
    }
}
