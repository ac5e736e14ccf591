use super::{required_arg, usage_status};
use crate::commands::registry::CommandInvocation;
use crate::commands::CommandResult;
use crate::core::message::{transcript_html, Message};
use crate::core::session::ChatSession;
use chrono::Utc;
use std::fs::OpenOptions;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

const USAGE_LOG: &str = "Usage: /log [filename]";
const USAGE_DUMP: &str = "Usage: /dump [filename]";

fn log_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S %Z")
        .to_string()
}

pub(crate) fn handle_log(
    session: &ChatSession,
    invocation: CommandInvocation<'_>,
) -> CommandResult {
    match invocation.args_len() {
        0 => {
            let mut logging = session.logging();
            let was_active = logging.is_active();
            let log_message = if was_active {
                format!("Logging paused at {}", log_timestamp())
            } else {
                format!("Logging resumed at {}", log_timestamp())
            };

            match logging.toggle_logging(&log_message) {
                Ok(message) => {
                    if !was_active {
                        if let Err(e) = logging.log_marker(&log_message) {
                            return CommandResult::Status(format!("Log error: {}", e));
                        }
                    }
                    CommandResult::Status(message)
                }
                Err(e) => CommandResult::Status(format!("Log error: {}", e)),
            }
        }
        1 => {
            let filename = match required_arg(&invocation, 0, USAGE_LOG) {
                Ok(filename) => filename,
                Err(result) => return result,
            };
            let mut logging = session.logging();
            match logging.set_log_file(filename.to_string()) {
                Ok(message) => {
                    let log_message = format!("Logging started at {}", log_timestamp());
                    if let Err(e) = logging.log_marker(&log_message) {
                        return CommandResult::Status(format!("Logfile error: {}", e));
                    }
                    CommandResult::Status(message)
                }
                Err(e) => CommandResult::Status(format!("Logfile error: {}", e)),
            }
        }
        _ => usage_status(USAGE_LOG),
    }
}

pub(crate) fn handle_dump(
    session: &ChatSession,
    invocation: CommandInvocation<'_>,
) -> CommandResult {
    let filename = match invocation.args_len() {
        0 => default_dump_filename(),
        1 => match required_arg(&invocation, 0, USAGE_DUMP) {
            Ok(filename) => filename.to_string(),
            Err(result) => return result,
        },
        _ => return usage_status(USAGE_DUMP),
    };

    match dump_transcript(&session.transcript(), Path::new(&filename)) {
        Ok(()) => CommandResult::Status(format!("Dumped: {}", filename)),
        Err(e) => CommandResult::Status(format!("Dump error: {}", e)),
    }
}

/// `podium-transcript-YYYY-MM-DD.html` for today's date.
pub fn default_dump_filename() -> String {
    format!("podium-transcript-{}.html", Utc::now().format("%Y-%m-%d"))
}

/// Write the transcript fragment to a new file. An existing file is left
/// untouched and reported as an error.
pub fn dump_transcript(
    messages: &[Message],
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            return Err(format!(
                "File '{}' already exists. Please specify a different filename with /dump <filename>.",
                path.display()
            )
            .into());
        }
        Err(err) => return Err(err.into()),
    };

    let mut writer = BufWriter::new(file);
    writer.write_all(transcript_html(messages).as_bytes())?;
    writer.flush()?;
    Ok(())
}
