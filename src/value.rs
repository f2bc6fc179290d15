//! Heterogeneous value model for raw lookup results.
//!
//! A lookup backend (web service or local database reader) produces a nested
//! key-value structure whose shape varies by data product and database edition.
//! This module models that structure as:
//! - `Value`: a tagged union of the types a raw result can hold
//! - `RawRecord`: the string-keyed map a record wraps
//!
//! Downcast helpers return `None` on type mismatch rather than failing, since
//! raw data is not guaranteed to match expectations across data-source versions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The raw nested key-value result returned by a lookup backend before typed
/// wrapping. Key order is irrelevant and unknown keys are ignored, so newer
/// data products remain readable without a client update.
pub type RawRecord = HashMap<String, Value>;

/// A single value in a raw lookup result.
///
/// `#[serde(untagged)]` lets a decoded JSON response body deserialize straight
/// into this type without any schema knowledge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// An explicit null in the raw result. Treated like an absent key by every
    /// downcast helper.
    Null,
    /// A boolean flag (e.g., `is_anonymous`).
    Bool(bool),
    /// An integer (e.g., `prefix_length`, `autonomous_system_number`).
    Int(i64),
    /// A floating-point number (e.g., `static_ip_score`).
    Float(f64),
    /// A string (e.g., `ip_address`, `isp`).
    String(String),
    /// An array of values (e.g., `subdivisions` in a full lookup response).
    Array(Vec<Value>),
    /// A nested map (e.g., the localized `names` map of a geographic entity).
    Map(RawRecord),
}

impl Value {
    /// Returns the string slice if this is a `String`, `None` otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Int`, `None` otherwise.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the integer as `u32` if this is a non-negative `Int` that fits,
    /// `None` otherwise.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::Int(n) => u32::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Returns the number as `f64` if this is a `Float` or an `Int`, `None`
    /// otherwise. Integers widen because JSON decoders do not distinguish
    /// `1` from `1.0` consistently across backends.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Returns the boolean if this is a `Bool`, `None` otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the array if this is an `Array`, `None` otherwise.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the nested map if this is a `Map`, `None` otherwise.
    pub fn as_map(&self) -> Option<&RawRecord> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<RawRecord> for Value {
    fn from(map: RawRecord) -> Self {
        Value::Map(map)
    }
}

/// Bridges upstream decoders that already produced a `serde_json::Value`
/// (e.g., an HTTP client that deserialized the response body generically).
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    // u64 beyond i64::MAX or a float; f64 is the lossless-enough
                    // fallback JSON itself guarantees
                    Value::Float(n.as_f64().unwrap_or_default())
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(values) => {
                Value::Array(values.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}
