use thiserror::Error;

use crate::query::QueryError;

/// Usage message for a malformed `set` line.
pub const SET_USAGE_ERROR: &str = "ERROR: expected set <path> <value>";

/// Usage message for a malformed `alias` line.
pub const ALIAS_USAGE_ERROR: &str = "ERROR: expected alias <name> <command>";

#[derive(Debug, Error)]
pub enum CommandError {
    /// The argument string did not match the command's expected shape.
    #[error("{0}")]
    Usage(&'static str),
    #[error("ERROR: invalid expression: {0}")]
    Query(#[from] QueryError),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CommandError {
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}
