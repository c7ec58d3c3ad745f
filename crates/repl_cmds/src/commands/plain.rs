use tracing::debug;

use super::{
    CommandHandler,
    CommandResult,
    CommandSpec,
    Output,
};

/// Static instance of the plain command handler
pub static PLAIN_HANDLER: PlainCommand = PlainCommand;

/// Plain command handler
#[derive(Clone, Copy)]
pub struct PlainCommand;

impl CommandHandler for PlainCommand {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn description(&self) -> &'static str {
        "Toggle plain JSON output"
    }

    fn usage(&self) -> &'static str {
        "plain"
    }

    fn execute(&self, spec: CommandSpec<'_>) -> CommandResult {
        spec.context.plain = !spec.context.plain;
        debug!(plain = spec.context.plain, "toggled plain output");
        Ok(Output::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_utils::{
        run,
        test_session,
    };

    #[test]
    fn test_plain_toggles_back() {
        let (mut ctx, _ends) = test_session();
        assert!(!ctx.plain);
        assert_eq!(run(&PLAIN_HANDLER, "", &mut ctx).unwrap(), Output::Empty);
        assert!(ctx.plain);
        run(&PLAIN_HANDLER, "ignored", &mut ctx).unwrap();
        assert!(!ctx.plain);
    }
}
