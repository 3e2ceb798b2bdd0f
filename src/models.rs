// frontend data model: rendered chat entries and decoded endpoint replies.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Correlates a settled network call with the interaction that started it.
/// Only used for bookkeeping and logging; replies are rendered in arrival
/// order regardless of id.
pub type RequestId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    /// CSS class carried by every bubble of this sender.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Ai => "ai",
        }
    }
}

/// One rendered chat bubble. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self::new(Sender::Ai, text)
    }
}

/// A file the user picked whose upload has not settled yet.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpload {
    pub file_name: String,
}

/// Reply of the summarisation endpoint.
///
/// A field is `Some` when the JSON value under that key is truthy in the
/// browser's sense: anything but `null`, `false`, `0`, or `""`. Non-string
/// values are rendered the way the page would stringify them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatReply {
    pub summary: Option<String>,
    pub error: Option<String>,
    pub ai: Option<String>,
}

impl ChatReply {
    /// Decode a response body.
    ///
    /// Fails when the body is not JSON or is JSON `null`. Any other
    /// non-object value yields an empty reply.
    pub fn from_json(body: &str) -> Result<Self, String> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| format!("Failed to parse reply: {}", e))?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, String> {
        match value {
            Value::Null => Err("Reply body was JSON null".to_string()),
            Value::Object(map) => {
                let field = |key: &str| map.get(key).filter(|v| is_truthy(v)).map(display_text);
                Ok(Self {
                    summary: field("summary"),
                    error: field("error"),
                    ai: field("ai"),
                })
            }
            _ => Ok(Self::default()),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Stringify a JSON value like `String(value)` in the browser.
fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if !n.is_i64() && !n.is_u64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        // Array.prototype.toString joins elements, null items become ""
        Value::Array(items) => items
            .iter()
            .map(display_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
