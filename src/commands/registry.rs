use super::CommandResult;
use crate::core::session::ChatSession;

pub type CommandHandler = fn(&ChatSession, CommandInvocation<'_>) -> CommandResult;

pub struct CommandUsage {
    pub syntax: &'static str,
    pub description: &'static str,
}

pub struct Command {
    pub name: &'static str,
    pub usages: &'static [CommandUsage],
    pub handler: CommandHandler,
}

#[derive(Clone, Copy)]
pub struct CommandInvocation<'a> {
    pub input: &'a str,
    pub args: &'a str,
}

impl<'a> CommandInvocation<'a> {
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.split_whitespace().nth(index)
    }

    pub fn args_len(&self) -> usize {
        self.args.split_whitespace().count()
    }
}

pub fn all_commands() -> &'static [Command] {
    COMMANDS
}

pub fn find_command(name: &str) -> Option<&'static Command> {
    all_commands()
        .iter()
        .find(|command| command.name.eq_ignore_ascii_case(name))
}

const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        usages: &[CommandUsage {
            syntax: "/help",
            description: "Show available commands.",
        }],
        handler: super::handlers::core::handle_help,
    },
    Command {
        name: "log",
        usages: &[
            CommandUsage {
                syntax: "/log <filename>",
                description: "Append the transcript to a log file.",
            },
            CommandUsage {
                syntax: "/log",
                description: "Pause or resume transcript logging.",
            },
        ],
        handler: super::handlers::io::handle_log,
    },
    Command {
        name: "dump",
        usages: &[CommandUsage {
            syntax: "/dump [filename]",
            description: "Write the conversation as HTML. Existing files are never overwritten.",
        }],
        handler: super::handlers::io::handle_dump,
    },
    Command {
        name: "quit",
        usages: &[CommandUsage {
            syntax: "/quit",
            description: "Leave the chat.",
        }],
        handler: super::handlers::core::handle_quit,
    },
];
