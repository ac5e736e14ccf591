pub(super) mod core;
pub(super) mod io;

use crate::commands::registry::CommandInvocation;
use crate::commands::CommandResult;

pub(super) fn usage_status(usage: &'static str) -> CommandResult {
    CommandResult::Status(usage.to_string())
}

pub(super) fn required_arg<'a>(
    invocation: &CommandInvocation<'a>,
    index: usize,
    usage: &'static str,
) -> Result<&'a str, CommandResult> {
    invocation.arg(index).ok_or_else(|| usage_status(usage))
}
