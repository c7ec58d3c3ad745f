//! Relaxed object-literal parser used for query narrowing and `set` values.
//!
//! Accepts a superset of JSON that is comfortable to type at a prompt:
//!
//! - top-level braces are optional: `role:user,cmd:save` or `role:user cmd:save`
//! - keys and string values may be bare words: `{a:b}`
//! - chained keys nest: `a:b:1` is `{"a":{"b":1}}`
//! - both quote styles are accepted: `'x y'` and `"x y"`
//! - bare `null`, `true`, `false` and numbers keep their JSON types
//!
//! Empty input parses to `null`, which callers treat as "no narrowing".

use serde_json::{
    Map,
    Value,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },
    #[error("unexpected '{found}' at position {position}")]
    Unexpected { found: char, position: usize },
    #[error("unterminated string starting at position {position}")]
    UnterminatedString { position: usize },
}

/// Parse a full query expression.
pub fn parse_query(input: &str) -> Result<Value, QueryError> {
    let mut parser = Parser::new(input);
    parser.skip_ws();
    if parser.at_end() {
        return Ok(Value::Null);
    }

    let first = parser.value()?;
    parser.skip_ws();
    if parser.eat(':') {
        let Some(key) = key_of(&first) else {
            return Err(parser.unexpected_at(parser.pos - 1));
        };
        let mut map = Map::new();
        let value = parser.pair_value()?;
        map.insert(key, value);
        parser.members(&mut map, None)?;
        return Ok(Value::Object(map));
    }

    if parser.at_end() {
        return Ok(first);
    }

    // Several bare values in a row form an implicit list.
    let mut items = vec![first];
    parser.elements(&mut items, None)?;
    Ok(Value::Array(items))
}

/// Parse a single value token, as used by `set <path> <value>`.
pub fn parse_value_expr(input: &str) -> Result<Value, QueryError> {
    let mut parser = Parser::new(input);
    parser.skip_ws();
    if parser.at_end() {
        return Err(QueryError::UnexpectedEnd { expected: "a value" });
    }
    let value = parser.pair_value()?;
    parser.skip_ws();
    match parser.peek() {
        None => Ok(value),
        Some(_) => Err(parser.unexpected_at(parser.pos)),
    }
}

/// Convert a bare (unquoted) word to its JSON value.
pub fn bare_value(word: &str) -> Value {
    match word {
        "null" => Value::Null,
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => {
            if is_integer(word) {
                if let Ok(i) = word.parse::<i64>() {
                    return Value::from(i);
                }
            }
            if is_float(word) {
                if let Some(n) = word.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
                    return Value::Number(n);
                }
            }
            Value::String(word.to_string())
        },
    }
}

fn key_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn is_integer(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_float(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    if s.is_empty() || !s.bytes().next().is_some_and(|b| b.is_ascii_digit() || b == b'.') {
        return false;
    }
    if !s.contains(['.', 'e', 'E']) {
        return false;
    }
    s.bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ':' | '{' | '}' | '[' | ']')
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Skip whitespace and at most one comma separator.
    fn skip_separator(&mut self) {
        self.skip_ws();
        if self.eat(',') {
            self.skip_ws();
        }
    }

    fn unexpected_at(&self, position: usize) -> QueryError {
        match self.chars.get(position) {
            Some(&found) => QueryError::Unexpected { found, position },
            None => QueryError::UnexpectedEnd { expected: "a value" },
        }
    }

    fn value(&mut self) -> Result<Value, QueryError> {
        self.skip_ws();
        match self.peek() {
            None => Err(QueryError::UnexpectedEnd { expected: "a value" }),
            Some('{') => {
                self.pos += 1;
                let mut map = Map::new();
                self.members(&mut map, Some('}'))?;
                Ok(Value::Object(map))
            },
            Some('[') => {
                self.pos += 1;
                let mut items = Vec::new();
                self.elements(&mut items, Some(']'))?;
                Ok(Value::Array(items))
            },
            Some(q @ ('"' | '\'')) => self.quoted(q).map(Value::String),
            Some(c) if is_delimiter(c) => Err(self.unexpected_at(self.pos)),
            Some(_) => Ok(bare_value(&self.word())),
        }
    }

    /// Value on the right of a `key:`; a scalar followed by another `:` is
    /// itself a key and nests.
    fn pair_value(&mut self) -> Result<Value, QueryError> {
        let value = self.value()?;
        let before = self.pos;
        self.skip_ws();
        if self.peek() == Some(':') {
            if let Some(key) = key_of(&value) {
                self.pos += 1;
                let mut map = Map::new();
                map.insert(key, self.pair_value()?);
                return Ok(Value::Object(map));
            }
        }
        self.pos = before;
        Ok(value)
    }

    /// Object members up to `close`, or to end of input when `close` is `None`.
    fn members(&mut self, map: &mut Map<String, Value>, close: Option<char>) -> Result<(), QueryError> {
        loop {
            self.skip_separator();
            match (self.peek(), close) {
                (None, None) => return Ok(()),
                (None, Some(_)) => return Err(QueryError::UnexpectedEnd { expected: "'}'" }),
                (Some(c), Some(end)) if c == end => {
                    self.pos += 1;
                    return Ok(());
                },
                _ => {},
            }

            let key_pos = self.pos;
            let key = match self.value()? {
                Value::Array(_) | Value::Object(_) => return Err(self.unexpected_at(key_pos)),
                other => key_of(&other).unwrap_or_default(),
            };
            self.skip_ws();
            if !self.eat(':') {
                return Err(match self.peek() {
                    Some(found) => QueryError::Unexpected {
                        found,
                        position: self.pos,
                    },
                    None => QueryError::UnexpectedEnd { expected: "':'" },
                });
            }
            let value = self.pair_value()?;
            map.insert(key, value);
        }
    }

    fn elements(&mut self, items: &mut Vec<Value>, close: Option<char>) -> Result<(), QueryError> {
        loop {
            self.skip_separator();
            match (self.peek(), close) {
                (None, None) => return Ok(()),
                (None, Some(_)) => return Err(QueryError::UnexpectedEnd { expected: "']'" }),
                (Some(c), Some(end)) if c == end => {
                    self.pos += 1;
                    return Ok(());
                },
                _ => {},
            }
            items.push(self.value()?);
        }
    }

    fn quoted(&mut self, quote: char) -> Result<String, QueryError> {
        let start = self.pos;
        self.pos += 1;
        let mut out = String::new();
        while let Some(c) = self.peek() {
            self.pos += 1;
            match c {
                c if c == quote => return Ok(out),
                '\\' => {
                    let Some(escaped) = self.peek() else {
                        break;
                    };
                    self.pos += 1;
                    out.push(match escaped {
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        other => other,
                    });
                },
                c => out.push(c),
            }
        }
        Err(QueryError::UnterminatedString { position: start })
    }

    fn word(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(|c| !is_delimiter(c)) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }
}
