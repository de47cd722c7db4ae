//! [`BitValue`] — the dynamic value tree all encoders/decoders operate on.

use crate::tag::PrimaryTag;

/// A dynamically-typed value tree.
///
/// This is the closed set of shapes the wire grammar can carry:
/// - primitives (null, booleans)
/// - numbers (`i64`, `u64` for magnitudes above `i64::MAX`, `f64`)
/// - strings
/// - arrays
/// - dictionaries (ordered key/value pairs with unique string keys)
///
/// Values are transient: they are built fresh per encode/decode call and
/// never retained by the codec.
#[derive(Debug, Clone, PartialEq)]
pub enum BitValue {
    Null,
    Bool(bool),
    Int(i64),
    /// Unsigned integer above `i64::MAX`.
    UInt(u64),
    Float(f64),
    Str(String),
    Array(Vec<BitValue>),
    /// Ordered key/value pairs; keys are unique.
    Dict(Vec<(String, BitValue)>),
}

impl BitValue {
    /// The primary tag this value encodes under.
    pub fn primary_tag(&self) -> PrimaryTag {
        match self {
            BitValue::Null | BitValue::Bool(_) => PrimaryTag::Primitive,
            BitValue::Int(_) | BitValue::UInt(_) | BitValue::Float(_) => PrimaryTag::Number,
            BitValue::Str(_) => PrimaryTag::String,
            BitValue::Array(_) => PrimaryTag::Array,
            BitValue::Dict(_) => PrimaryTag::Dictionary,
        }
    }
}

impl From<bool> for BitValue {
    fn from(v: bool) -> Self {
        BitValue::Bool(v)
    }
}

impl From<i64> for BitValue {
    fn from(v: i64) -> Self {
        BitValue::Int(v)
    }
}

impl From<i32> for BitValue {
    fn from(v: i32) -> Self {
        BitValue::Int(v as i64)
    }
}

impl From<u64> for BitValue {
    fn from(v: u64) -> Self {
        if v <= i64::MAX as u64 {
            BitValue::Int(v as i64)
        } else {
            BitValue::UInt(v)
        }
    }
}

impl From<f64> for BitValue {
    fn from(v: f64) -> Self {
        BitValue::Float(v)
    }
}

impl From<&str> for BitValue {
    fn from(v: &str) -> Self {
        BitValue::Str(v.to_string())
    }
}

impl From<String> for BitValue {
    fn from(v: String) -> Self {
        BitValue::Str(v)
    }
}

impl From<Vec<BitValue>> for BitValue {
    fn from(v: Vec<BitValue>) -> Self {
        BitValue::Array(v)
    }
}

impl From<serde_json::Value> for BitValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => BitValue::Null,
            serde_json::Value::Bool(b) => BitValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    BitValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    BitValue::UInt(u)
                } else {
                    BitValue::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => BitValue::Str(s),
            serde_json::Value::Array(arr) => {
                BitValue::Array(arr.into_iter().map(BitValue::from).collect())
            }
            serde_json::Value::Object(obj) => BitValue::Dict(
                obj.into_iter()
                    .map(|(k, v)| (k, BitValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<BitValue> for serde_json::Value {
    fn from(v: BitValue) -> Self {
        match v {
            BitValue::Null => serde_json::Value::Null,
            BitValue::Bool(b) => serde_json::Value::Bool(b),
            BitValue::Int(i) => serde_json::json!(i),
            BitValue::UInt(u) => serde_json::json!(u),
            BitValue::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            BitValue::Str(s) => serde_json::Value::String(s),
            BitValue::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            BitValue::Dict(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}
