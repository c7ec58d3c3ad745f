//! Capabilities the command handlers consume from the host service runtime.

pub mod memory;

use std::fmt::Debug;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::query::{
    self,
    QueryError,
};

/// A registered action in the runtime's pattern registry.
///
/// `priordef` points at the definition this one overrode. Chains are built
/// only by wrapping already-registered definitions, so they are acyclic and
/// end in `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionDef {
    pub id: String,
    pub plugin_fullname: String,
    pub pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callpoint: Option<String>,
    #[serde(skip)]
    pub priordef: Option<Arc<ActionDef>>,
}

impl ActionDef {
    /// This definition followed by every definition it overrode, newest first.
    pub fn chain(&self) -> impl Iterator<Item = &ActionDef> {
        std::iter::successors(Some(self), |def| def.priordef.as_deref())
    }
}

/// Handle to the running service.
pub trait Runtime: Send + Sync + Debug {
    /// Snapshot of the runtime's option tree.
    fn options(&self) -> Value;

    /// Apply `patch` to the runtime's option tree.
    fn set_options(&self, patch: &Value);

    /// Patterns of all actions matching `narrow`.
    fn list(&self, narrow: &Value) -> Vec<Value>;

    /// The action registered for exactly `narrow`, if any.
    fn find(&self, narrow: &Value) -> Option<Arc<ActionDef>>;

    /// Parse query text typed at the prompt.
    fn parse_query(&self, text: &str) -> Result<Value, QueryError> {
        query::parse_query(text)
    }
}

/// The connection a session is attached to.
pub trait Transport: Send + Debug {
    /// Close the connection, ending the session.
    fn end(&mut self);
}
