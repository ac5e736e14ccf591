use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body posted to the chat endpoint.
#[derive(Debug, Serialize, Clone)]
pub struct ChatRequest {
    pub message: String,
}

/// Body returned by the chat endpoint, on success and on failure alike.
///
/// `response` is kept as a raw JSON value: a missing or non-string field is
/// not a protocol error, it just renders as nothing.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChatReply {
    #[serde(default)]
    pub response: Value,
}

impl ChatReply {
    /// The response text when it is a non-empty string.
    pub fn text(&self) -> Option<&str> {
        self.response.as_str().filter(|text| !text.is_empty())
    }
}
