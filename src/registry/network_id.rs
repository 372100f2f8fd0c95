use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

const WILDCARD: &str = "*";

/// Chain identifier as written in the configuration.
///
/// The integer and string forms are kept apart: `Number(42)` and `Text("42")`
/// compare unequal and serialize back the way they were read. Use
/// [`NetworkId::matches`] to compare against an id reported by a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum NetworkId {
    Number(u64),
    Text(String),
}

impl NetworkId {
    /// Validates a raw configuration value. Strings must be decimal digits or `*`.
    pub fn from_value(value: &Value) -> Result<Self, String> {
        match value {
            Value::Number(number) => number.as_u64().map(Self::Number).ok_or_else(|| {
                format!("network_id must be a non-negative integer, got {number}")
            }),
            Value::String(text) => Self::from_text(text),
            Value::Null => Err("missing network_id".to_string()),
            other => Err(format!(
                "network_id must be an integer or a numeric string, got {}",
                json_kind(other)
            )),
        }
    }

    fn from_text(text: &str) -> Result<Self, String> {
        if text == WILDCARD {
            return Ok(Self::Text(text.to_string()));
        }

        if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(format!(
                "network_id string must contain only decimal digits, got \"{text}\""
            ));
        }

        Ok(Self::Text(text.to_string()))
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Text(text) if text == WILDCARD)
    }

    /// Numeric value of the id, if it has one that fits in a `u64`.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(text) => text.parse().ok(),
        }
    }

    pub fn matches(&self, reported: u64) -> bool {
        self.is_wildcard() || self.as_u64() == Some(reported)
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::Number(number) => Value::from(*number),
            Self::Text(text) => Value::from(text.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for NetworkId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(de::Error::custom)
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => write!(f, "\"{text}\""),
        }
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
