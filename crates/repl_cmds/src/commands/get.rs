use tracing::debug;

use super::{
    CommandHandler,
    CommandResult,
    CommandSpec,
    Output,
};
use crate::options::reach;

/// Static instance of the get command handler
pub static GET_HANDLER: GetCommand = GetCommand;

/// Get command handler
#[derive(Clone, Copy)]
pub struct GetCommand;

impl CommandHandler for GetCommand {
    fn name(&self) -> &'static str {
        "get"
    }

    fn description(&self) -> &'static str {
        "Show the runtime option at a dotted path"
    }

    fn usage(&self) -> &'static str {
        "get <path>"
    }

    fn execute(&self, spec: CommandSpec<'_>) -> CommandResult {
        let path = spec.argstr.trim();
        let options = spec.context.runtime.options();

        Ok(match reach(&options, path) {
            Some(value) => Output::Json(value.clone()),
            None => {
                debug!(path, "option path not found");
                Output::Undefined
            },
        })
    }
}
