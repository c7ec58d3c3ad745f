/// CommandHandler Trait
///
/// Each console command is a handler that owns its name, help text and
/// argument parsing. Handlers run synchronously and produce exactly one
/// result per invocation; a malformed argument string is reported through
/// the returned error and leaves all session and option state untouched.
use super::{
    CommandInfo,
    CommandResult,
    CommandSpec,
};

/// Trait for command handlers
pub trait CommandHandler: Send + Sync {
    /// Returns the name of the command as typed at the prompt
    fn name(&self) -> &'static str;

    /// Returns a short description of the command for help text
    fn description(&self) -> &'static str;

    /// Returns usage information for the command
    fn usage(&self) -> &'static str;

    /// Help entry served by the `help` command
    fn info(&self) -> CommandInfo {
        CommandInfo {
            description: self.description().to_string(),
            usage: self.usage().to_string(),
        }
    }

    /// Execute the command against the session
    fn execute(&self, spec: CommandSpec<'_>) -> CommandResult;
}
