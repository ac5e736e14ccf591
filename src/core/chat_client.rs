use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use tracing::{debug, warn};

use crate::api::{ChatReply, ChatRequest};

pub const SERVER_ERROR_FALLBACK: &str = "Could not reach the server.";
pub const CONNECTION_ERROR_TEXT: &str =
    "Sorry, I encountered a connection problem. Please try again.";

/// Ways a chat request can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// The server answered with a non-2xx status.
    Server {
        status: u16,
        /// The reply's `response` text, when the server provided one.
        message: Option<String>,
    },
    /// The request never completed or the reply was not JSON.
    Connection(String),
}

impl ChatError {
    /// Text shown to the user, in the bot's voice, in place of a reply.
    pub fn display_text(&self) -> String {
        match self {
            ChatError::Server { message, .. } => {
                format!("Error: {}", message.as_deref().unwrap_or(SERVER_ERROR_FALLBACK))
            }
            ChatError::Connection(_) => CONNECTION_ERROR_TEXT.to_string(),
        }
    }
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::Server { status, message } => write!(
                f,
                "HTTP Error {status}: {}",
                message.as_deref().unwrap_or("Unknown server error")
            ),
            ChatError::Connection(detail) => write!(f, "Connection error: {detail}"),
        }
    }
}

impl StdError for ChatError {}

/// Client for the chat endpoint: one JSON POST per message.
#[derive(Clone, Debug)]
pub struct ChatClient {
    client: reqwest::Client,
    url: String,
}

impl ChatClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub async fn send(&self, message: &str) -> Result<ChatReply, ChatError> {
        let request = ChatRequest {
            message: message.to_string(),
        };
        debug!(url = %self.url, chars = message.chars().count(), "Sending chat message");

        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|err| connection_error("request failed", &err))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| connection_error("reading body failed", &err))?;
        let reply: ChatReply = serde_json::from_str(&body)
            .map_err(|err| connection_error("malformed response body", &err))?;

        if status.is_success() {
            debug!(status = status.as_u16(), "Chat reply received");
            return Ok(reply);
        }

        let error = ChatError::Server {
            status: status.as_u16(),
            message: reply.text().map(str::to_string),
        };
        warn!(status = status.as_u16(), error = %error, "Chat server reported an error");
        Err(error)
    }
}

fn connection_error(context: &str, err: &dyn fmt::Display) -> ChatError {
    warn!(error = %err, "Chat {context}");
    ChatError::Connection(format!("{context}: {err}"))
}
