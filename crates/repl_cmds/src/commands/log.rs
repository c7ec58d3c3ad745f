use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{
    CommandHandler,
    CommandResult,
    CommandSpec,
    Output,
};

static LOG_MATCH_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*match\s+([^\r\n]*)").unwrap());

/// Static instance of the log command handler
pub static LOG_HANDLER: LogCommand = LogCommand;

/// Log command handler
#[derive(Clone, Copy)]
pub struct LogCommand;

impl CommandHandler for LogCommand {
    fn name(&self) -> &'static str {
        "log"
    }

    fn description(&self) -> &'static str {
        "Filter captured log entries; 'log match <text>' also turns capture on"
    }

    fn usage(&self) -> &'static str {
        "log [match <text>]"
    }

    fn execute(&self, spec: CommandSpec<'_>) -> CommandResult {
        let ctx = spec.context;

        // A stale filter only survives while capture stays on.
        if !ctx.log_capture {
            ctx.log_match = None;
        }

        if let Some(caps) = LOG_MATCH_REGEX.captures(spec.argstr) {
            ctx.log_capture = true;
            ctx.log_match = Some(caps[1].to_string());
        }

        debug!(capture = ctx.log_capture, log_match = ?ctx.log_match, "updated log capture");
        Ok(Output::Empty)
    }
}
