use crate::commands::registry::CommandInvocation;
use crate::commands::{all_commands, CommandResult};
use crate::core::session::ChatSession;

pub(crate) fn handle_help(
    _session: &ChatSession,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    let mut help = String::from("Commands:");
    for command in all_commands() {
        for usage in command.usages {
            help.push_str(&format!("\n  {:<18} {}", usage.syntax, usage.description));
        }
    }
    help.push_str("\nEnd a line with \\ to continue the message on the next line.");
    CommandResult::Status(help)
}

pub(crate) fn handle_quit(
    _session: &ChatSession,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    CommandResult::Quit
}
