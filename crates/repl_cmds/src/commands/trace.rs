use tracing::debug;

use super::{
    CommandHandler,
    CommandResult,
    CommandSpec,
    Output,
};

/// Static instance of the trace command handler
pub static TRACE_HANDLER: TraceCommand = TraceCommand;

/// Trace command handler
#[derive(Clone, Copy)]
pub struct TraceCommand;

impl CommandHandler for TraceCommand {
    fn name(&self) -> &'static str {
        "trace"
    }

    fn description(&self) -> &'static str {
        "Toggle tracing of action calls"
    }

    fn usage(&self) -> &'static str {
        "trace"
    }

    fn execute(&self, spec: CommandSpec<'_>) -> CommandResult {
        spec.context.act_trace = !spec.context.act_trace;
        debug!(act_trace = spec.context.act_trace, "toggled action tracing");
        Ok(Output::Empty)
    }
}
