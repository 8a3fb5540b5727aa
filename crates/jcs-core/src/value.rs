//! # Value Model — Tagged JSON Values
//!
//! The in-memory form the encoder consumes. The model preserves the two
//! distinctions canonical output depends on: object-vs-array for empty
//! containers, and integer-vs-float for numbers. A number that arrived as an
//! integer token within signed 64-bit range keeps its integer tag and never
//! goes through the float formatter; every other number is a finite binary64.
//!
//! Values are immutable inputs to a canonicalize call. `Value` owns its
//! children, so the model is a tree by construction — cycles cannot be built
//! in safe Rust.

use crate::error::JcsError;

/// A JSON value.
///
/// # Invariants
///
/// - `Float` holds a finite binary64. [`Value::from_f64`] rejects NaN and the
///   infinities; the encoder independently re-checks, so a directly
///   constructed non-finite `Float` fails at encode time instead of emitting.
/// - Object keys are unique. The parser enforces this per its duplicate-key
///   policy; the encoder re-checks after sorting for hand-built objects.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The `null` literal.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// A number carried as a mathematical integer in signed 64-bit range.
    Int(i64),
    /// Any other number, an IEEE-754 binary64.
    Float(f64),
    /// A sequence of Unicode scalar values.
    String(String),
    /// An ordered sequence; element order is semantic and preserved.
    Array(Vec<Value>),
    /// Members with unique keys; insertion order is not semantic, the
    /// encoder imposes UTF-16 code-unit order.
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Wrap a binary64, rejecting NaN and the infinities.
    ///
    /// # Errors
    ///
    /// Returns [`JcsError::UnrepresentableNumber`] for non-finite input.
    pub fn from_f64(value: f64) -> Result<Self, JcsError> {
        if value.is_finite() {
            Ok(Value::Float(value))
        } else {
            Err(JcsError::UnrepresentableNumber(value))
        }
    }

    /// True for `Value::Object`, including the empty object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// True for `Value::Array`, including the empty array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = JcsError;

    /// Convert a `serde_json` tree, preserving the integer-vs-float
    /// distinction. `u64` values beyond `i64::MAX` are representable only as
    /// binary64 and are converted with nearest rounding.
    fn try_from(value: serde_json::Value) -> Result<Self, JcsError> {
        Ok(match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::from_f64(u as f64)?
                } else {
                    match n.as_f64() {
                        Some(f) => Value::from_f64(f)?,
                        None => return Err(JcsError::UnrepresentableNumber(f64::NAN)),
                    }
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| Ok((k, Value::try_from(v)?)))
                    .collect::<Result<_, JcsError>>()?,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_f64_accepts_finite() {
        assert_eq!(Value::from_f64(1.5).unwrap(), Value::Float(1.5));
        assert_eq!(Value::from_f64(0.0).unwrap(), Value::Float(0.0));
        assert_eq!(Value::from_f64(f64::MAX).unwrap(), Value::Float(f64::MAX));
    }

    #[test]
    fn test_from_f64_rejects_nan_and_infinities() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            match Value::from_f64(bad) {
                Err(JcsError::UnrepresentableNumber(_)) => {}
                other => panic!("expected UnrepresentableNumber, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty_containers_stay_distinct() {
        let object = Value::Object(Vec::new());
        let array = Value::Array(Vec::new());
        assert!(object.is_object());
        assert!(array.is_array());
        assert_ne!(object, array);
    }

    #[test]
    fn test_try_from_serde_json_preserves_integer_tag() {
        let tree = serde_json::json!({"int": 42, "float": 1.5, "big": -7});
        let value = Value::try_from(tree).unwrap();
        let Value::Object(members) = value else {
            panic!("expected object");
        };
        let lookup = |key: &str| {
            members
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(lookup("int"), Value::Int(42));
        assert_eq!(lookup("float"), Value::Float(1.5));
        assert_eq!(lookup("big"), Value::Int(-7));
    }

    #[test]
    fn test_try_from_serde_json_u64_beyond_i64() {
        let tree = serde_json::json!(18_446_744_073_709_551_615u64);
        let value = Value::try_from(tree).unwrap();
        assert_eq!(value, Value::Float(18_446_744_073_709_551_615u64 as f64));
    }

    #[test]
    fn test_try_from_serde_json_nested() {
        let tree = serde_json::json!({"a": [true, null], "b": {}});
        let value = Value::try_from(tree).unwrap();
        let Value::Object(members) = value else {
            panic!("expected object");
        };
        assert_eq!(
            members[0],
            (
                "a".to_string(),
                Value::Array(vec![Value::Bool(true), Value::Null])
            )
        );
        assert_eq!(members[1], ("b".to_string(), Value::Object(Vec::new())));
    }
}
