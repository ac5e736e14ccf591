use std::error::Error as StdError;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::core::chat_client::ChatClient;
use crate::core::message::Message;
use crate::utils::logging::LoggingState;

/// Reasons a send is refused before anything reaches the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendError {
    /// The input was empty after trimming.
    EmptyMessage,
    /// Another request is still waiting for its reply.
    Busy,
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::EmptyMessage => write!(f, "Message is empty"),
            SendError::Busy => write!(f, "Still waiting for the previous reply"),
        }
    }
}

impl StdError for SendError {}

/// One conversation with the chat server.
///
/// At most one request is in flight at a time; a send attempted while
/// another is pending fails with [`SendError::Busy`] instead of queueing.
pub struct ChatSession {
    client: ChatClient,
    transcript: Mutex<Vec<Message>>,
    logging: Mutex<LoggingState>,
    in_flight: AtomicBool,
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ChatSession {
    /// Start a session whose transcript opens with the greeting.
    pub fn new(client: ChatClient, logging: LoggingState) -> Self {
        let session = Self {
            client,
            transcript: Mutex::new(Vec::new()),
            logging: Mutex::new(logging),
            in_flight: AtomicBool::new(false),
        };
        session.record(Message::greeting());
        session
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Send one user message and wait for the bot's answer.
    ///
    /// Server and connection failures are not errors here: they come back
    /// as a bot message carrying the text shown to the user.
    pub async fn send(&self, input: &str) -> Result<Message, SendError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(SendError::EmptyMessage);
        }

        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(SendError::Busy)?;
        self.record(Message::user(text));

        let reply = match self.client.send(text).await {
            Ok(reply) => {
                let content = reply.response.as_str().unwrap_or_default();
                debug!(chars = content.chars().count(), "Bot replied");
                Message::bot(content)
            }
            Err(err) => Message::bot(err.display_text()),
        };

        self.record(reply.clone());
        Ok(reply)
    }

    /// Snapshot of every message so far, greeting first.
    pub fn transcript(&self) -> Vec<Message> {
        self.transcript
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn logging(&self) -> MutexGuard<'_, LoggingState> {
        self.logging.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, message: Message) {
        if let Err(err) = self.logging().log_message(&message) {
            warn!(error = %err, "Failed to write transcript log");
        }
        self.transcript
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }
}
