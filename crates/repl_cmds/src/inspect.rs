//! Rendering of command results for display in the console.

use std::fmt::Write as _;

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

const INDENT: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InspectOptions {
    /// Nesting levels shown before collapsing; `None` is unlimited.
    pub depth: Option<i64>,
    pub colors: bool,
    /// Width above which a collection is split over multiple lines.
    pub break_length: usize,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            depth: Some(2),
            colors: false,
            break_length: 80,
        }
    }
}

/// Value renderer for a session, rebuilt whenever its options change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inspector {
    options: InspectOptions,
}

impl Inspector {
    pub fn new(options: InspectOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &InspectOptions {
        &self.options
    }

    pub fn depth(&self) -> Option<i64> {
        self.options.depth
    }

    /// Render `value`. Plain mode emits compact JSON and ignores depth.
    pub fn render(&self, value: &Value, plain: bool) -> String {
        if plain {
            return value.to_string();
        }
        self.render_at(value, 0)
    }

    fn render_at(&self, value: &Value, level: usize) -> String {
        match value {
            Value::Null => self.paint("null", "1"),
            Value::Bool(b) => self.paint(&b.to_string(), "33"),
            Value::Number(n) => self.paint(&n.to_string(), "33"),
            Value::String(s) => self.paint(&quote(s), "32"),
            Value::Array(items) if items.is_empty() => "[]".to_string(),
            Value::Object(map) if map.is_empty() => "{}".to_string(),
            Value::Array(_) if self.too_deep(level) => self.paint("[Array]", "36"),
            Value::Object(_) if self.too_deep(level) => self.paint("[Object]", "36"),
            Value::Array(items) => {
                let parts: Vec<String> = items.iter().map(|v| self.render_at(v, level + 1)).collect();
                self.wrap('[', ']', &parts, level)
            },
            Value::Object(map) => {
                let parts: Vec<String> = map
                    .iter()
                    .map(|(k, v)| format!("{}: {}", key(k), self.render_at(v, level + 1)))
                    .collect();
                self.wrap('{', '}', &parts, level)
            },
        }
    }

    fn too_deep(&self, level: usize) -> bool {
        match self.options.depth {
            Some(depth) => (level as i64) > depth,
            None => false,
        }
    }

    fn wrap(&self, open: char, close: char, parts: &[String], level: usize) -> String {
        let single = format!("{open} {} {close}", parts.join(", "));
        let indent = INDENT.repeat(level);
        let fits = indent.len() + single.len() <= self.options.break_length;
        if fits && !single.contains('\n') {
            return single;
        }

        let mut out = String::new();
        out.push(open);
        out.push('\n');
        for (i, part) in parts.iter().enumerate() {
            let sep = if i + 1 < parts.len() { "," } else { "" };
            let _ = writeln!(out, "{indent}{INDENT}{part}{sep}");
        }
        out.push_str(&indent);
        out.push(close);
        out
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.options.colors {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "\\n"))
}

fn key(k: &str) -> String {
    let mut chars = k.chars();
    let identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if identifier { k.to_string() } else { quote(k) }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn inspector(depth: Option<i64>) -> Inspector {
        Inspector::new(InspectOptions {
            depth,
            ..Default::default()
        })
    }

    #[test]
    fn test_plain_is_compact_json() {
        let value = json!({"a": {"b": {"c": {"d": 1}}}});
        assert_eq!(inspector(Some(0)).render(&value, true), r#"{"a":{"b":{"c":{"d":1}}}}"#);
    }

    #[test]
    fn test_depth_collapses_nested() {
        let value = json!({"a": {"b": {"c": 1}}, "l": [[1]]});
        assert_eq!(inspector(Some(0)).render(&value, false), "{ a: [Object], l: [Array] }");
        assert_eq!(inspector(Some(1)).render(&value, false), "{ a: { b: [Object] }, l: [ [Array] ] }");
        assert_eq!(inspector(None).render(&value, false), "{ a: { b: { c: 1 } }, l: [ [ 1 ] ] }");
    }

    #[test]
    fn test_scalars_and_keys() {
        let value = json!({"name": "it's", "x-y": null, "ok": true, "e": {}});
        assert_eq!(
            inspector(None).render(&value, false),
            r"{ name: 'it\'s', 'x-y': null, ok: true, e: {} }"
        );
    }

    #[test]
    fn test_long_output_breaks_lines() {
        let inspector = Inspector::new(InspectOptions {
            depth: None,
            colors: false,
            break_length: 10,
        });
        assert_eq!(inspector.render(&json!([1, 2, 3]), false), "[\n  1,\n  2,\n  3\n]");
    }

    #[test]
    fn test_colors() {
        let inspector = Inspector::new(InspectOptions {
            depth: None,
            colors: true,
            break_length: 80,
        });
        assert_eq!(inspector.render(&json!(5), false), "\x1b[33m5\x1b[0m");
    }
}
