pub mod alias;
pub mod depth;
pub mod find;
pub mod get;
pub mod handler;
pub mod help;
pub mod history;
pub mod list;
pub mod log;
pub mod plain;
pub mod prior;
pub mod quit;
pub mod registry;
pub mod set;
pub mod test_utils;
pub mod trace;

pub use alias::AliasCommand;
pub use depth::DepthCommand;
pub use find::FindCommand;
pub use get::GetCommand;
pub use handler::CommandHandler;
pub use help::HelpCommand;
pub use history::HistoryCommand;
pub use list::ListCommand;
pub use log::LogCommand;
pub use plain::PlainCommand;
pub use prior::PriorCommand;
pub use quit::QuitCommand;
pub use registry::CommandRegistry;
pub use set::SetCommand;
pub use trace::TraceCommand;
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

use crate::context::SessionContext;
use crate::error::CommandError;
use crate::options::ReplOptions;

/// Everything a handler gets for one invocation.
#[derive(Debug)]
pub struct CommandSpec<'a> {
    /// The input line with the command name removed.
    pub argstr: &'a str,
    pub context: &'a mut SessionContext,
    pub options: &'a mut ReplOptions,
}

/// What a successful command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Nothing to report.
    Empty,
    /// The command looked something up and found nothing.
    Undefined,
    Text(String),
    Json(Value),
}

impl Output {
    /// The result half of a `respond(error, result)` pair.
    pub fn into_response(self) -> Option<Value> {
        match self {
            Self::Empty | Self::Undefined => None,
            Self::Text(text) => Some(Value::String(text)),
            Self::Json(value) => Some(value),
        }
    }

    pub fn into_value(self) -> Value {
        self.into_response().unwrap_or(Value::Null)
    }
}

pub type CommandResult = Result<Output, CommandError>;

/// Help entry for one command, as served by `help`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInfo {
    pub description: String,
    pub usage: String,
}

/// The built-in console commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Get,
    Depth,
    Plain,
    Quit,
    List,
    Find,
    Prior,
    History,
    Log,
    Set,
    Alias,
    Trace,
    Help,
}

impl CommandKind {
    pub const ALL: [CommandKind; 13] = [
        Self::Get,
        Self::Depth,
        Self::Plain,
        Self::Quit,
        Self::List,
        Self::Find,
        Self::Prior,
        Self::History,
        Self::Log,
        Self::Set,
        Self::Alias,
        Self::Trace,
        Self::Help,
    ];

    /// Name typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Depth => "depth",
            Self::Plain => "plain",
            Self::Quit => "quit",
            Self::List => "list",
            Self::Find => "find",
            Self::Prior => "prior",
            Self::History => "history",
            Self::Log => "log",
            Self::Set => "set",
            Self::Alias => "alias",
            Self::Trace => "trace",
            Self::Help => "help",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn handler(self) -> &'static dyn CommandHandler {
        match self {
            Self::Get => &get::GET_HANDLER,
            Self::Depth => &depth::DEPTH_HANDLER,
            Self::Plain => &plain::PLAIN_HANDLER,
            Self::Quit => &quit::QUIT_HANDLER,
            Self::List => &list::LIST_HANDLER,
            Self::Find => &find::FIND_HANDLER,
            Self::Prior => &prior::PRIOR_HANDLER,
            Self::History => &history::HISTORY_HANDLER,
            Self::Log => &log::LOG_HANDLER,
            Self::Set => &set::SET_HANDLER,
            Self::Alias => &alias::ALIAS_HANDLER,
            Self::Trace => &trace::TRACE_HANDLER,
            Self::Help => &help::HELP_HANDLER,
        }
    }
}
