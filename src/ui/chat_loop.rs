//! Line-oriented interactive chat.
//!
//! Each input line is either a slash command or a message for the server.
//! A line ending in `\` continues the message on the next line. Bot replies
//! are printed as rendered markup.

use std::error::Error;
use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::commands::{process_input, CommandResult};
use crate::core::chat_client::ChatClient;
use crate::core::config::Config;
use crate::core::session::ChatSession;
use crate::utils::logging::LoggingState;

const PROMPT: &str = "You: ";
const CONTINUATION_PROMPT: &str = "...  ";

pub async fn run_chat(
    config: &Config,
    base_url: Option<&str>,
    log: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let url = config.chat_url(base_url);
    let client = ChatClient::new(url.clone(), config.timeout())?;
    let logging = LoggingState::new(log.or_else(|| config.log_file.clone()))?;
    let session = ChatSession::new(client, logging);

    eprintln!("🎤 Podium: chatting with {url}");
    eprintln!("💡 Type /help for commands, /quit or Ctrl+D to leave");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_loop(&session, stdin, &mut stdout).await
}

/// Drive one session from `input` until end of input or `/quit`.
pub async fn run_loop<R, W>(
    session: &ChatSession,
    input: R,
    out: &mut W,
) -> Result<(), Box<dyn Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    for message in session.transcript() {
        writeln!(out, "{}\n", message.to_markup())?;
    }

    let mut lines = input.lines();
    let mut pending = String::new();
    write!(out, "{PROMPT}")?;
    out.flush()?;

    while let Some(line) = lines.next_line().await? {
        if append_line(&mut pending, &line) {
            write!(out, "{CONTINUATION_PROMPT}")?;
            out.flush()?;
            continue;
        }

        let entry = std::mem::take(&mut pending);
        if !handle_entry(session, &entry, out).await? {
            return Ok(());
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    if !pending.is_empty() {
        handle_entry(session, &pending, out).await?;
    }
    writeln!(out)?;
    Ok(())
}

/// Add one physical line to the message being composed. Returns true when
/// the line asked for a continuation.
fn append_line(pending: &mut String, line: &str) -> bool {
    if !pending.is_empty() {
        pending.push('\n');
    }
    match line.strip_suffix('\\') {
        Some(head) => {
            pending.push_str(head);
            true
        }
        None => {
            pending.push_str(line);
            false
        }
    }
}

/// Returns false once the user has asked to leave.
async fn handle_entry<W: Write>(
    session: &ChatSession,
    entry: &str,
    out: &mut W,
) -> Result<bool, Box<dyn Error>> {
    match process_input(session, entry) {
        CommandResult::Continue => {}
        CommandResult::Status(text) => writeln!(out, "{text}")?,
        CommandResult::Quit => return Ok(false),
        CommandResult::ProcessAsMessage(text) => match session.send(&text).await {
            Ok(reply) => writeln!(out, "{}\n", reply.to_markup())?,
            Err(err) => {
                debug!(error = %err, "Message not sent");
                writeln!(out, "{err}")?;
            }
        },
    }
    Ok(true)
}
