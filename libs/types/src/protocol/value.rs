//! Application value union accepted from topic publishers.
//!
//! [`Value`] is the closed set of shapes a client may hand to the codec:
//! four scalars plus an ordered sequence. The sequence variant intentionally
//! admits mixed-kind contents; homogeneity is a classification rule enforced
//! by the codec, not a structural property of the data. Numeric values carry
//! no integer/double marker of their own: the subtype is decided at
//! classification time from the runtime value.

use serde::Serialize;

/// Runtime kind of a [`Value`], used for array homogeneity checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Boolean scalar
    Boolean,
    /// Numeric scalar (integer/double decided at classification time)
    Number,
    /// UTF-8 string scalar
    String,
    /// Opaque byte buffer
    Raw,
    /// Ordered sequence of values
    Array,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Raw => "raw",
            ValueKind::Array => "array",
        };
        f.write_str(label)
    }
}

/// Closed union of application values the client can put on the wire.
///
/// Serializes untagged: the payload slot of a message tuple contains the
/// bare value, with the wire type carried separately as the tuple's tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean scalar
    Boolean(bool),
    /// Numeric scalar; whole-valued numbers are integers on the wire
    Number(f64),
    /// UTF-8 string scalar
    String(String),
    /// Opaque byte buffer
    Raw(Vec<u8>),
    /// Ordered sequence; classifiable only when every element shares a kind
    Array(Vec<Value>),
}

impl Value {
    /// Runtime kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Raw(_) => ValueKind::Raw,
            Value::Array(_) => ValueKind::Array,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Raw(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Raw(v.to_vec())
    }
}

impl From<Vec<bool>> for Value {
    fn from(v: Vec<bool>) -> Self {
        Value::Array(v.into_iter().map(Value::Boolean).collect())
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::Array(v.into_iter().map(Value::Number).collect())
    }
}

impl From<Vec<i64>> for Value {
    fn from(v: Vec<i64>) -> Self {
        Value::Array(v.into_iter().map(|x| Value::Number(x as f64)).collect())
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::Array(v.into_iter().map(Value::String).collect())
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Value::Array(v.into_iter().map(Value::from).collect())
    }
}
