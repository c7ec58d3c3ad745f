use serde_json::Value;
use tracing::debug;

use super::{
    CommandHandler,
    CommandResult,
    CommandSpec,
    Output,
};

/// Static instance of the list command handler
pub static LIST_HANDLER: ListCommand = ListCommand;

/// List command handler
#[derive(Clone, Copy)]
pub struct ListCommand;

impl CommandHandler for ListCommand {
    fn name(&self) -> &'static str {
        "list"
    }

    fn description(&self) -> &'static str {
        "List the patterns of actions matching a query"
    }

    fn usage(&self) -> &'static str {
        "list [query]"
    }

    fn execute(&self, spec: CommandSpec<'_>) -> CommandResult {
        let runtime = &spec.context.runtime;
        let narrow = runtime.parse_query(spec.argstr)?;
        let patterns = runtime.list(&narrow);
        debug!(%narrow, count = patterns.len(), "listed actions");
        Ok(Output::Json(Value::Array(patterns)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::commands::test_utils::{
        run,
        sample_runtime,
        test_session_with,
    };
    use crate::error::CommandError;

    #[test]
    fn test_list_narrows() {
        let (mut ctx, _ends) = test_session_with(sample_runtime());

        let Output::Json(Value::Array(all)) = run(&LIST_HANDLER, "", &mut ctx).unwrap() else {
            panic!("expected an array");
        };
        assert_eq!(all.len(), 3);

        assert_eq!(
            run(&LIST_HANDLER, "role:entity", &mut ctx).unwrap(),
            Output::Json(json!([{"role": "entity", "cmd": "save"}]))
        );
    }

    #[test]
    fn test_list_rejects_malformed_query() {
        let (mut ctx, _ends) = test_session_with(sample_runtime());
        assert!(matches!(run(&LIST_HANDLER, "{role:", &mut ctx), Err(CommandError::Query(_))));
    }
}
