use super::{
    CommandHandler,
    CommandResult,
    CommandSpec,
    Output,
};

/// Static instance of the history command handler
pub static HISTORY_HANDLER: HistoryCommand = HistoryCommand;

/// History command handler
#[derive(Clone, Copy)]
pub struct HistoryCommand;

impl CommandHandler for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn description(&self) -> &'static str {
        "Show the lines entered in this session"
    }

    fn usage(&self) -> &'static str {
        "history"
    }

    fn execute(&self, spec: CommandSpec<'_>) -> CommandResult {
        Ok(Output::Text(spec.context.history.join("\n")))
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
    fn test_history_joins_lines_in_order() {
        let (mut ctx, _ends) = test_session();
        for line in ["a", "b", "c"] {
            ctx.record_history(line);
        }
        assert_eq!(run(&HISTORY_HANDLER, "", &mut ctx).unwrap(), Output::Text("a\nb\nc".to_string()));
    }
}
