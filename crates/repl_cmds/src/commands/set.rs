use std::sync::LazyLock;

use regex::Regex;
use tracing::{
    info,
    warn,
};

use super::{
    CommandHandler,
    CommandResult,
    CommandSpec,
    Output,
};
use crate::error::{
    CommandError,
    SET_USAGE_ERROR,
};
use crate::options::parse_option;
use crate::query::parse_value_expr;

static SET_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(\S+)\s+(\S+)").unwrap());

/// Static instance of the set command handler
pub static SET_HANDLER: SetCommand = SetCommand;

/// Set command handler
#[derive(Clone, Copy)]
pub struct SetCommand;

impl CommandHandler for SetCommand {
    fn name(&self) -> &'static str {
        "set"
    }

    fn description(&self) -> &'static str {
        "Set a runtime option; paths under 'repl' also update this console"
    }

    fn usage(&self) -> &'static str {
        "set <path> <value>"
    }

    fn execute(&self, spec: CommandSpec<'_>) -> CommandResult {
        let Some(caps) = SET_REGEX.captures(spec.argstr) else {
            warn!(argstr = spec.argstr, "malformed set command");
            return Err(CommandError::Usage(SET_USAGE_ERROR));
        };

        let path = &caps[1];
        let value = parse_value_expr(&caps[2])?;
        let patch = parse_option(path, value);

        info!(path, %patch, "setting runtime option");
        spec.context.runtime.set_options(&patch);

        if let Some(repl) = patch.get("repl").filter(|repl| repl.is_object()) {
            spec.options.merge(repl);
        }

        Ok(Output::Empty)
    }
}
