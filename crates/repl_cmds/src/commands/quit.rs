use tracing::info;

use super::{
    CommandHandler,
    CommandResult,
    CommandSpec,
    Output,
};

/// Static instance of the quit command handler
pub static QUIT_HANDLER: QuitCommand = QuitCommand;

/// Quit command handler
#[derive(Clone, Copy)]
pub struct QuitCommand;

impl CommandHandler for QuitCommand {
    fn name(&self) -> &'static str {
        "quit"
    }

    fn description(&self) -> &'static str {
        "Close this console session"
    }

    fn usage(&self) -> &'static str {
        "quit"
    }

    fn execute(&self, spec: CommandSpec<'_>) -> CommandResult {
        info!("console session closed by quit");
        spec.context.transport.end();
        // The transport may already be closing, so the empty reply is best-effort.
        Ok(Output::Empty)
    }
}
