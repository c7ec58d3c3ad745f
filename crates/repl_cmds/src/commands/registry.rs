/// Command Registry
///
/// The CommandRegistry maps each command name to its handler. The dispatcher
/// looks names up by exact match only: there is no abbreviation or fuzzy
/// matching here, and a line whose first word is not a registered name is
/// left for the caller to interpret (usually as an action submission).
use std::collections::{
    BTreeMap,
    HashMap,
};
use std::sync::OnceLock;

use serde_json::Value;
use tracing::debug;

use super::{
    CommandHandler,
    CommandInfo,
    CommandKind,
    CommandResult,
    CommandSpec,
};
use crate::context::SessionContext;
use crate::options::ReplOptions;

/// A registry of available commands that can be executed
pub struct CommandRegistry {
    /// Map of command names to their handlers
    commands: HashMap<&'static str, &'static dyn CommandHandler>,
}

impl CommandRegistry {
    /// Create a new command registry with all built-in commands
    pub fn new() -> Self {
        let mut registry = Self {
            commands: HashMap::new(),
        };

        for kind in CommandKind::ALL {
            registry.register(kind.name(), kind.handler());
        }

        registry
    }

    /// Get the global instance of the command registry
    pub fn global() -> &'static CommandRegistry {
        static INSTANCE: OnceLock<CommandRegistry> = OnceLock::new();
        INSTANCE.get_or_init(CommandRegistry::new)
    }

    /// Register a command handler under `name`
    pub fn register(&mut self, name: &'static str, handler: &'static dyn CommandHandler) {
        self.commands.insert(name, handler);
    }

    /// Get a command handler by name
    pub fn get(&self, name: &str) -> Option<&'static dyn CommandHandler> {
        self.commands.get(name).copied()
    }

    /// Check if a command exists
    pub fn command_exists(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Get all command names, sorted
    pub fn command_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Help entries for every registered command, keyed by name
    pub fn command_map(&self) -> BTreeMap<String, CommandInfo> {
        self.commands
            .iter()
            .map(|(name, handler)| (name.to_string(), handler.info()))
            .collect()
    }

    /// Split an input line into the command name and its argument string.
    ///
    /// Returns `None` for a blank line. The argument string keeps everything
    /// after the whitespace that follows the name, including any trailing
    /// line terminator.
    pub fn parse_command_line(line: &str) -> Option<(&str, &str)> {
        let line = line.trim_start();
        if line.trim_end().is_empty() {
            return None;
        }

        match line.find(char::is_whitespace) {
            Some(end) => Some((&line[..end], line[end..].trim_start_matches([' ', '\t']))),
            None => Some((line, "")),
        }
    }

    /// Parse and execute a command line.
    ///
    /// Returns `None` if the line is blank or does not name a registered
    /// command.
    pub fn dispatch(
        &self,
        line: &str,
        context: &mut SessionContext,
        options: &mut ReplOptions,
    ) -> Option<CommandResult> {
        let (name, argstr) = Self::parse_command_line(line)?;
        let Some(handler) = self.get(name) else {
            debug!(name, "not a console command");
            return None;
        };

        debug!(command = name, argstr, "executing console command");
        Some(handler.execute(CommandSpec {
            argstr,
            context,
            options,
        }))
    }

    /// Execute a command line and report the outcome through `respond` as an
    /// `(error, result)` pair. `respond` is called exactly once if the line
    /// names a command, and not at all otherwise; the return value says which.
    pub fn dispatch_with<F>(
        &self,
        line: &str,
        context: &mut SessionContext,
        options: &mut ReplOptions,
        respond: F,
    ) -> bool
    where
        F: FnOnce(Option<String>, Option<Value>),
    {
        match self.dispatch(line, context, options) {
            Some(Ok(output)) => {
                respond(None, output.into_response());
                true
            },
            Some(Err(err)) => {
                respond(Some(err.to_string()), None);
                true
            },
            None => false,
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
