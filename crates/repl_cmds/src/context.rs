use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::commands::CommandInfo;
use crate::inspect::Inspector;
use crate::options::ReplOptions;
use crate::runtime::{
    Runtime,
    Transport,
};

/// Per-connection state for one console client.
///
/// Created when a client connects and dropped when it disconnects. Each
/// session owns its context exclusively; handlers receive it by `&mut`.
#[derive(Debug)]
pub struct SessionContext {
    /// Render results as compact JSON instead of the inspector format.
    pub plain: bool,
    pub inspekt: Inspector,
    pub transport: Box<dyn Transport>,
    /// Input lines in the order they were entered.
    pub history: Vec<String>,
    pub log_capture: bool,
    /// Filter applied to captured log entries.
    pub log_match: Option<String>,
    pub alias: BTreeMap<String, String>,
    pub act_trace: bool,
    pub cmd_map: BTreeMap<String, CommandInfo>,
    pub runtime: Arc<dyn Runtime>,
}

impl SessionContext {
    pub fn new(
        runtime: Arc<dyn Runtime>,
        transport: Box<dyn Transport>,
        cmd_map: BTreeMap<String, CommandInfo>,
    ) -> Self {
        Self {
            plain: false,
            inspekt: Inspector::default(),
            transport,
            history: Vec::new(),
            log_capture: false,
            log_match: None,
            alias: BTreeMap::new(),
            act_trace: false,
            cmd_map,
            runtime,
        }
    }

    /// Use the inspection settings from `options` instead of the defaults.
    pub fn with_options(mut self, options: &ReplOptions) -> Self {
        self.inspekt = Inspector::new(options.inspect_options());
        self
    }

    pub fn record_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    /// Expand a leading alias name in `line`. Expansion happens once, so an
    /// alias that refers to itself cannot loop.
    pub fn resolve_alias(&self, line: &str) -> String {
        let trimmed = line.trim_start();
        let (name, rest) = match trimmed.find(char::is_whitespace) {
            Some(end) => trimmed.split_at(end),
            None => (trimmed, ""),
        };
        match self.alias.get(name) {
            Some(expansion) => format!("{expansion}{rest}"),
            None => line.to_string(),
        }
    }

    /// Render a command result with the session's current display settings.
    pub fn inspect(&self, value: &Value) -> String {
        self.inspekt.render(value, self.plain)
    }
}
