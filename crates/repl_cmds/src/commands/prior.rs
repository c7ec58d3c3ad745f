use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::{
    CommandHandler,
    CommandResult,
    CommandSpec,
    Output,
};
use crate::runtime::ActionDef;

/// Static instance of the prior command handler
pub static PRIOR_HANDLER: PriorCommand = PriorCommand;

/// Prior command handler
#[derive(Clone, Copy)]
pub struct PriorCommand;

/// One step of an override chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorEntry {
    pub id: String,
    pub plugin: String,
    pub pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callpoint: Option<String>,
}

impl From<&ActionDef> for PriorEntry {
    fn from(def: &ActionDef) -> Self {
        Self {
            id: def.id.clone(),
            plugin: def.plugin_fullname.clone(),
            pattern: def.pattern.clone(),
            callpoint: def.callpoint.clone(),
        }
    }
}

impl CommandHandler for PriorCommand {
    fn name(&self) -> &'static str {
        "prior"
    }

    fn description(&self) -> &'static str {
        "Show an action and every definition it overrides, newest first"
    }

    fn usage(&self) -> &'static str {
        "prior <pattern>"
    }

    /// An empty list means no action matches the pattern.
    fn execute(&self, spec: CommandSpec<'_>) -> CommandResult {
        let runtime = &spec.context.runtime;
        let narrow = runtime.parse_query(spec.argstr)?;
        let Some(def) = runtime.find(&narrow) else {
            debug!(%narrow, "no action to trace priors for");
            return Ok(Output::Json(Value::Array(Vec::new())));
        };

        let priors: Vec<PriorEntry> = def.chain().map(PriorEntry::from).collect();
        Ok(Output::Json(serde_json::to_value(priors)?))
    }
}
