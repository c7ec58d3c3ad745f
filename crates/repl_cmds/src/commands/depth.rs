use tracing::debug;

use super::{
    CommandHandler,
    CommandResult,
    CommandSpec,
    Output,
};
use crate::inspect::{
    InspectOptions,
    Inspector,
};

/// Static instance of the depth command handler
pub static DEPTH_HANDLER: DepthCommand = DepthCommand;

/// Depth command handler
#[derive(Clone, Copy)]
pub struct DepthCommand;

impl CommandHandler for DepthCommand {
    fn name(&self) -> &'static str {
        "depth"
    }

    fn description(&self) -> &'static str {
        "Set how many levels of nested results are shown; no number means unlimited"
    }

    fn usage(&self) -> &'static str {
        "depth [levels]"
    }

    fn execute(&self, spec: CommandSpec<'_>) -> CommandResult {
        let depth = parse_int_prefix(spec.argstr);
        spec.context.inspekt = Inspector::new(InspectOptions {
            depth,
            ..spec.options.inspect_options()
        });
        debug!(?depth, "rebuilt inspector");

        let shown = depth.map_or_else(|| "null".to_string(), |d| d.to_string());
        Ok(Output::Text(format!("Inspection depth set to {shown}")))
    }
}

/// Read a base-10 integer from the start of `input`, ignoring leading
/// whitespace and anything after the digits. `None` when there are no digits.
fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    let magnitude = s[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
