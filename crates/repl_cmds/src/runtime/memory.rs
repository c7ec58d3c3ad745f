//! In-process [`Runtime`] backed by an option tree and an action table.
//!
//! Useful for embedding the console in tools without a live service, and as
//! the fixture for the handler tests.

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::{
    Map,
    Value,
};
use tracing::debug;

use super::{
    ActionDef,
    Runtime,
};
use crate::options::deep_extend;
use crate::query::{
    QueryError,
    parse_query,
};

#[derive(Debug)]
struct Registration {
    msg: Map<String, Value>,
    def: Arc<ActionDef>,
}

#[derive(Debug, Default)]
struct State {
    options: Value,
    actions: Vec<Registration>,
    next_id: usize,
}

#[derive(Debug, Default)]
pub struct MemoryRuntime {
    state: RwLock<State>,
}

impl MemoryRuntime {
    pub fn new(options: Value) -> Self {
        Self {
            state: RwLock::new(State {
                options,
                ..Default::default()
            }),
        }
    }

    /// Register an action for `pattern`, e.g. `role:user,cmd:login`.
    ///
    /// Registering the same pattern again overrides the previous definition,
    /// which becomes the new one's `priordef`.
    pub fn add_action(
        &self,
        pattern: &str,
        plugin: &str,
        callpoint: Option<&str>,
    ) -> Result<Arc<ActionDef>, QueryError> {
        let msg = match parse_query(pattern)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let canonical = canonical_pattern(&msg);

        let mut state = self.state.write();
        state.next_id += 1;
        let id = format!("{plugin}/{}", state.next_id);
        let existing = state.actions.iter().position(|reg| reg.msg == msg);

        let def = Arc::new(ActionDef {
            id,
            plugin_fullname: plugin.to_string(),
            pattern: canonical,
            callpoint: callpoint.map(str::to_string),
            priordef: existing.map(|i| Arc::clone(&state.actions[i].def)),
        });
        debug!(id = %def.id, pattern = %def.pattern, overrides = existing.is_some(), "registered action");

        match existing {
            Some(i) => state.actions[i].def = Arc::clone(&def),
            None => state.actions.push(Registration {
                msg,
                def: Arc::clone(&def),
            }),
        }
        Ok(def)
    }
}

impl Runtime for MemoryRuntime {
    fn options(&self) -> Value {
        self.state.read().options.clone()
    }

    fn set_options(&self, patch: &Value) {
        deep_extend(&mut self.state.write().options, patch);
    }

    fn list(&self, narrow: &Value) -> Vec<Value> {
        let state = self.state.read();
        let mut matches: Vec<&Registration> = state
            .actions
            .iter()
            .filter(|reg| match narrow {
                Value::Object(narrow) => narrow.iter().all(|(k, v)| reg.msg.get(k) == Some(v)),
                _ => true,
            })
            .collect();
        matches.sort_by(|a, b| a.def.pattern.cmp(&b.def.pattern));
        matches.into_iter().map(|reg| Value::Object(reg.msg.clone())).collect()
    }

    fn find(&self, narrow: &Value) -> Option<Arc<ActionDef>> {
        let Value::Object(narrow) = narrow else {
            return None;
        };
        let state = self.state.read();
        state
            .actions
            .iter()
            .find(|reg| &reg.msg == narrow)
            .map(|reg| Arc::clone(&reg.def))
    }
}

/// Keys sorted, `key:value` pairs joined by commas.
fn canonical_pattern(msg: &Map<String, Value>) -> String {
    let mut pairs: Vec<(&String, &Value)> = msg.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    pairs
        .into_iter()
        .map(|(k, v)| match v {
            Value::String(s) => format!("{k}:{s}"),
            other => format!("{k}:{other}"),
        })
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_override_links_priordef() {
        let runtime = MemoryRuntime::default();
        let first = runtime.add_action("role:user,cmd:login", "user", None).unwrap();
        let second = runtime.add_action("cmd:login role:user", "audit", Some("audit.js:10")).unwrap();

        assert_eq!(first.pattern, "cmd:login,role:user");
        assert_eq!(second.pattern, first.pattern);
        assert_eq!(second.priordef.as_deref(), Some(first.as_ref()));
        assert_eq!(second.chain().count(), 2);

        let found = runtime.find(&json!({"role": "user", "cmd": "login"})).unwrap();
        assert_eq!(found.id, second.id);
    }

    #[test]
    fn test_list_filters_by_narrow() {
        let runtime = MemoryRuntime::default();
        runtime.add_action("role:user,cmd:login", "user", None).unwrap();
        runtime.add_action("role:user,cmd:logout", "user", None).unwrap();
        runtime.add_action("role:entity,cmd:save", "entity", None).unwrap();

        assert_eq!(runtime.list(&Value::Null).len(), 3);
        assert_eq!(runtime.list(&json!({"role": "user"})), vec![
            json!({"role": "user", "cmd": "login"}),
            json!({"role": "user", "cmd": "logout"}),
        ]);
        assert!(runtime.list(&json!({"role": "none"})).is_empty());
    }

    #[test]
    fn test_find_requires_exact_pattern() {
        let runtime = MemoryRuntime::default();
        runtime.add_action("role:user,cmd:login", "user", None).unwrap();
        assert!(runtime.find(&json!({"role": "user"})).is_none());
        assert!(runtime.find(&Value::Null).is_none());
    }

    #[test]
    fn test_options_patch() {
        let runtime = MemoryRuntime::new(json!({"a": {"x": 1}}));
        runtime.set_options(&json!({"a": {"b": 5}}));
        assert_eq!(runtime.options(), json!({"a": {"x": 1, "b": 5}}));
    }
}
