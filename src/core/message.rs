use serde::{Deserialize, Serialize};

use crate::ui::markdown;

pub const GREETING: &str = "Hello! How can I help you prepare your speech today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            content: content.into(),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            content: content.into(),
        }
    }

    pub fn greeting() -> Self {
        Self::bot(GREETING)
    }

    /// Display markup for this message.
    ///
    /// Only bot text is treated as Markdown. User text is always shown
    /// literally, so nothing a user types can produce markup.
    pub fn to_markup(&self) -> String {
        match self.sender {
            Sender::Bot => markdown::render(&self.content),
            Sender::User => format!("<p>{}</p>", html_escape::encode_text(&self.content)),
        }
    }
}

/// Chat-page fragment for a whole transcript, one message element each.
pub fn transcript_html(messages: &[Message]) -> String {
    let mut html = String::from("<div id=\"chat-box\">\n");
    for message in messages {
        html.push_str(&format!(
            "<div class=\"message {}-message\"><div class=\"message-content\">{}</div></div>\n",
            message.sender.as_str(),
            message.to_markup()
        ));
    }
    html.push_str("</div>\n");
    html
}
