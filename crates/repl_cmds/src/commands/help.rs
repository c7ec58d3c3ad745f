use super::{
    CommandHandler,
    CommandResult,
    CommandSpec,
    Output,
};

/// Static instance of the help command handler
pub static HELP_HANDLER: HelpCommand = HelpCommand;

/// Help command handler
#[derive(Clone, Copy)]
pub struct HelpCommand;

impl CommandHandler for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Show the available commands"
    }

    fn usage(&self) -> &'static str {
        "help"
    }

    fn execute(&self, spec: CommandSpec<'_>) -> CommandResult {
        Ok(Output::Json(serde_json::to_value(&spec.context.cmd_map)?))
    }
}
