//! Dotted-path option helpers and the REPL's live option set.

use eyre::{
    Result,
    WrapErr,
    eyre,
};
use serde_json::{
    Map,
    Value,
    json,
};
use tracing::warn;

use crate::inspect::InspectOptions;

/// Resolve a dotted `path` inside `root`.
///
/// An empty path resolves to `root` itself. Numeric segments index arrays,
/// negative ones from the end. Any missing step yields `None`.
pub fn reach<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(root);
    }

    let mut current = root;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => {
                let index: i64 = segment.parse().ok()?;
                let index = if index < 0 { items.len() as i64 + index } else { index };
                items.get(usize::try_from(index).ok()?)?
            },
            _ => return None,
        };
    }
    Some(current)
}

/// Build the nested patch that sets `path` to `value`, e.g. `a.b` becomes
/// `{"a": {"b": value}}`.
pub fn parse_option(path: &str, value: Value) -> Value {
    path.rsplit('.').fold(value, |inner, segment| {
        let mut map = Map::new();
        map.insert(segment.to_string(), inner);
        Value::Object(map)
    })
}

/// Recursively merge `patch` into `target`. Objects merge key by key,
/// everything else replaces.
pub fn deep_extend(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(key) {
                    Some(existing) => deep_extend(existing, value),
                    None => {
                        target.insert(key.clone(), value.clone());
                    },
                }
            }
        },
        (target, patch) => *target = patch.clone(),
    }
}

/// Options that configure the REPL itself, as opposed to the runtime's
/// option tree. `set repl.<path> <value>` lands here as well.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplOptions {
    values: Value,
}

impl ReplOptions {
    pub fn new(values: Map<String, Value>) -> Self {
        Self {
            values: Value::Object(values),
        }
    }

    /// Load options from a JSON document, layered over the defaults.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let parsed: Value = serde_json::from_str(source).wrap_err("failed to parse REPL options")?;
        if !parsed.is_object() {
            return Err(eyre!("REPL options must be a JSON object, got: {parsed}"));
        }
        let mut options = Self::default();
        options.merge(&parsed);
        Ok(options)
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        reach(&self.values, path)
    }

    pub fn merge(&mut self, patch: &Value) {
        deep_extend(&mut self.values, patch);
    }

    pub fn as_value(&self) -> &Value {
        &self.values
    }

    /// Typed view of the `inspect` section. Falls back to defaults if the
    /// section is missing or malformed.
    pub fn inspect_options(&self) -> InspectOptions {
        let Some(section) = self.get("inspect") else {
            return InspectOptions::default();
        };
        serde_json::from_value(section.clone()).unwrap_or_else(|err| {
            warn!(%err, "ignoring malformed inspect options");
            InspectOptions::default()
        })
    }
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            values: json!({
                "inspect": {
                    "depth": 2,
                    "colors": false,
                    "breakLength": 80,
                },
            }),
        }
    }
}
