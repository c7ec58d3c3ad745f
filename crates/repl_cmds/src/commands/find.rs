use serde_json::Value;

use super::{
    CommandHandler,
    CommandResult,
    CommandSpec,
    Output,
};

/// Static instance of the find command handler
pub static FIND_HANDLER: FindCommand = FindCommand;

/// Find command handler
#[derive(Clone, Copy)]
pub struct FindCommand;

impl CommandHandler for FindCommand {
    fn name(&self) -> &'static str {
        "find"
    }

    fn description(&self) -> &'static str {
        "Show the action definition registered for a pattern"
    }

    fn usage(&self) -> &'static str {
        "find <pattern>"
    }

    fn execute(&self, spec: CommandSpec<'_>) -> CommandResult {
        let runtime = &spec.context.runtime;
        let narrow = runtime.parse_query(spec.argstr)?;
        Ok(Output::Json(match runtime.find(&narrow) {
            Some(def) => serde_json::to_value(def.as_ref())?,
            None => Value::Null,
        }))
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

    #[test]
    fn test_find_returns_definition() {
        let (mut ctx, _ends) = test_session_with(sample_runtime());
        let Output::Json(def) = run(&FIND_HANDLER, "role:entity,cmd:save", &mut ctx).unwrap() else {
            panic!("expected json");
        };
        assert_eq!(def["plugin_fullname"], json!("entity"));
        assert_eq!(def["pattern"], json!("cmd:save,role:entity"));
        assert!(def.get("callpoint").is_none());
        assert!(def.get("priordef").is_none());
    }

    #[test]
    fn test_find_missing_is_null() {
        let (mut ctx, _ends) = test_session_with(sample_runtime());
        assert_eq!(run(&FIND_HANDLER, "role:none", &mut ctx).unwrap(), Output::Json(Value::Null));
    }
}
