//! # JSON Kind Discrimination
//!
//! Classifies a `serde_json::Value` into one of the seven draft-4 primitive
//! kinds. The integer/number split follows JSON text semantics: a numeric
//! value with no fractional component and no exponent parses as `i64`/`u64`
//! and is classified `Integer`; every other numeric literal is `Number`.
//! A string that merely looks numeric is still `String` — there is no
//! coercion anywhere in the engine.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The runtime kind of a JSON value, named the way draft-4 `type` names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonKind {
    /// `null`.
    Null,
    /// `true` / `false`.
    Boolean,
    /// Numeric literal with no fractional part and no exponent.
    Integer,
    /// Any other numeric literal.
    Number,
    /// String literal.
    String,
    /// Ordered sequence of values.
    Array,
    /// Mapping from string keys to values, insertion order preserved.
    Object,
}

impl JsonKind {
    /// Classify an instance value.
    pub fn of(value: &Value) -> JsonKind {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    JsonKind::Integer
                } else {
                    JsonKind::Number
                }
            }
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    /// The draft-4 `type` keyword name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Integer => "integer",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }

    /// Parse a draft-4 `type` keyword name. Returns `None` for anything
    /// that is not one of the seven primitive type names.
    pub fn from_name(name: &str) -> Option<JsonKind> {
        match name {
            "null" => Some(JsonKind::Null),
            "boolean" => Some(JsonKind::Boolean),
            "integer" => Some(JsonKind::Integer),
            "number" => Some(JsonKind::Number),
            "string" => Some(JsonKind::String),
            "array" => Some(JsonKind::Array),
            "object" => Some(JsonKind::Object),
            _ => None,
        }
    }

    /// Whether a declared type accepts an instance of kind `actual`.
    ///
    /// Draft-4 rule: a declared `number` accepts an integer instance
    /// (integers are numbers); the reverse does not hold.
    pub fn accepts(self, actual: JsonKind) -> bool {
        self == actual || (self == JsonKind::Number && actual == JsonKind::Integer)
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_scalars() {
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!(true)), JsonKind::Boolean);
        assert_eq!(JsonKind::of(&json!("x")), JsonKind::String);
    }

    #[test]
    fn test_classify_integer_vs_number() {
        assert_eq!(JsonKind::of(&json!(42)), JsonKind::Integer);
        assert_eq!(JsonKind::of(&json!(-7)), JsonKind::Integer);
        assert_eq!(JsonKind::of(&json!(3.25)), JsonKind::Number);
        // 1e2 parses as f64, so it is "number" for diagnostic purposes.
        let v: Value = serde_json::from_str("1e2").unwrap();
        assert_eq!(JsonKind::of(&v), JsonKind::Number);
    }

    #[test]
    fn test_numeric_looking_string_is_string() {
        assert_eq!(JsonKind::of(&json!("42")), JsonKind::String);
    }

    #[test]
    fn test_classify_containers() {
        assert_eq!(JsonKind::of(&json!([1, 2])), JsonKind::Array);
        assert_eq!(JsonKind::of(&json!({"a": 1})), JsonKind::Object);
    }

    #[test]
    fn test_name_round_trip() {
        for kind in [
            JsonKind::Null,
            JsonKind::Boolean,
            JsonKind::Integer,
            JsonKind::Number,
            JsonKind::String,
            JsonKind::Array,
            JsonKind::Object,
        ] {
            assert_eq!(JsonKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(JsonKind::from_name("decimal"), None);
    }

    #[test]
    fn test_number_accepts_integer() {
        assert!(JsonKind::Number.accepts(JsonKind::Integer));
        assert!(!JsonKind::Integer.accepts(JsonKind::Number));
        assert!(JsonKind::String.accepts(JsonKind::String));
        assert!(!JsonKind::String.accepts(JsonKind::Integer));
    }
}
