//! Helpers over the untyped value tree
//!
//! The value tree itself is [`serde_json::Value`]. An absent value (a key that
//! is not present, an index past the end) is `None`.

use serde_json::Value;
use std::fmt;

/// Describe the kind of a value the way mismatch messages report it
pub fn describe(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "a boolean",
        Some(Value::Number(_)) => "a number",
        Some(Value::String(_)) => "a string",
        Some(Value::Array(_)) => "an array",
        Some(Value::Object(_)) => "an object",
    }
}

/// Render a value as compact JSON text, `undefined` when absent
pub fn render(value: Option<&Value>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "undefined".to_string(),
    }
}

/// `expected <expected>, got <kind of actual>`
pub(crate) fn expected_got(expected: &str, actual: Option<&Value>) -> String {
    format!("expected {}, got {}", expected, describe(actual))
}

/// One step of a [`value_at`](crate::value_at) path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Look up a key in an object
    Key(String),
    /// Look up an index in an array
    Index(usize),
}

impl From<&str> for Step {
    fn from(key: &str) -> Self {
        Step::Key(key.to_string())
    }
}

impl From<String> for Step {
    fn from(key: String) -> Self {
        Step::Key(key)
    }
}

impl From<usize> for Step {
    fn from(index: usize) -> Self {
        Step::Index(index)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Key(key) => write!(f, ".{}", key),
            Step::Index(index) => write!(f, "[{}]", index),
        }
    }
}
