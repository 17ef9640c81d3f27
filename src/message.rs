// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw form input, exactly as typed.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FormFields {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub project_path: String,
}

impl FormFields {
    pub fn new(message: impl Into<String>, project_path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            project_path: project_path.into(),
        }
    }

    /// Build the outgoing request, or `None` when the message is blank.
    pub fn to_request(&self) -> Option<ChatRequest> {
        let message = self.message.trim();
        if message.is_empty() {
            return None;
        }
        let project_path = match self.project_path.trim() {
            "" => None,
            p => Some(p.to_string()),
        };
        Some(ChatRequest {
            message: message.to_string(),
            project_path,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_path: Option<String>,
}

/// Parsed body of a `/chat` reply. Anything that is not a JSON object is empty.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReplyBody(Map<String, Value>);

impl ReplyBody {
    pub fn parse(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(map)) => Self(map),
            _ => Self::default(),
        }
    }

    /// Text of `key` if the field carries a usable value.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }

    /// Error text for a failed exchange: `detail`, then `message`.
    pub fn error_text(&self) -> Option<String> {
        self.text("detail").or_else(|| self.text("message"))
    }
}
