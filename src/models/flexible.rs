use std::fmt;

use serde::{Deserialize, Serialize};

/// A wire field the panel renders as either a string or a number.
///
/// Used for external identifiers, pack references and allocation aliases.
/// The field itself is `Option<FlexibleValue>`: `null` or an absent key decode
/// to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlexibleValue {
    Text(String),
    Number(serde_json::Number),
}

impl FlexibleValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FlexibleValue::Text(s) => Some(s),
            FlexibleValue::Number(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FlexibleValue::Number(n) => n.as_i64(),
            FlexibleValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FlexibleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlexibleValue::Text(s) => f.write_str(s),
            FlexibleValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<String> for FlexibleValue {
    fn from(value: String) -> Self {
        FlexibleValue::Text(value)
    }
}

impl From<&str> for FlexibleValue {
    fn from(value: &str) -> Self {
        FlexibleValue::Text(value.to_string())
    }
}

impl From<i64> for FlexibleValue {
    fn from(value: i64) -> Self {
        FlexibleValue::Number(value.into())
    }
}

impl From<u64> for FlexibleValue {
    fn from(value: u64) -> Self {
        FlexibleValue::Number(value.into())
    }
}
