use std::sync::LazyLock;

use regex::Regex;
use tracing::{
    debug,
    warn,
};

use super::{
    CommandHandler,
    CommandResult,
    CommandSpec,
    Output,
};
use crate::error::{
    ALIAS_USAGE_ERROR,
    CommandError,
};

static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(\S+)\s+([^\r\n]+)").unwrap());

/// Static instance of the alias command handler
pub static ALIAS_HANDLER: AliasCommand = AliasCommand;

/// Alias command handler
#[derive(Clone, Copy)]
pub struct AliasCommand;

impl CommandHandler for AliasCommand {
    fn name(&self) -> &'static str {
        "alias"
    }

    fn description(&self) -> &'static str {
        "Define a shorthand name for a command line"
    }

    fn usage(&self) -> &'static str {
        "alias <name> <command>"
    }

    fn execute(&self, spec: CommandSpec<'_>) -> CommandResult {
        let Some(caps) = ALIAS_REGEX.captures(spec.argstr) else {
            warn!(argstr = spec.argstr, "malformed alias command");
            return Err(CommandError::Usage(ALIAS_USAGE_ERROR));
        };

        let (name, command) = (&caps[1], &caps[2]);
        debug!(name, command, "defined alias");
        spec.context.alias.insert(name.to_string(), command.to_string());
        Ok(Output::Empty)
    }
}
