mod handlers;
mod registry;

pub use handlers::io::{default_dump_filename, dump_transcript};
pub use registry::{all_commands, find_command, CommandInvocation};

use crate::core::session::ChatSession;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    /// Show a line of status text; nothing is sent.
    Status(String),
    ProcessAsMessage(String),
    Quit,
}

/// Route one line of input: slash commands run here, anything else is
/// handed back to be sent as a message.
pub fn process_input(session: &ChatSession, input: &str) -> CommandResult {
    let trimmed = input.trim();

    let Some(rest) = trimmed.strip_prefix('/') else {
        return CommandResult::ProcessAsMessage(input.to_string());
    };

    let mut parts = rest.splitn(2, char::is_whitespace);
    let command_name = match parts.next() {
        Some(name) if !name.is_empty() => name,
        _ => return CommandResult::ProcessAsMessage(input.to_string()),
    };
    let args = parts.next().unwrap_or("").trim();

    match registry::find_command(command_name) {
        Some(command) => {
            let invocation = CommandInvocation {
                input: trimmed,
                args,
            };
            (command.handler)(session, invocation)
        }
        None => CommandResult::Status(format!(
            "Unknown command: /{command_name} (try /help)"
        )),
    }
}
