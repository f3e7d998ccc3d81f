//! # Validation Diagnostics
//!
//! One `Diagnostic` is one reported violation: an instance location path
//! plus a message. Diagnostics are plain value objects compared by
//! structural equality — they are never raised as control-flow errors, and
//! an instance failing every possible check still produces an ordinary
//! (if large) set of them.
//!
//! ## Message Compatibility
//!
//! The rendered form `"<path>: <message>"` is a compatibility surface:
//! downstream consumers match these strings verbatim, so every template
//! lives here, behind one constructor per violation kind. Keyword
//! evaluators must not format message text themselves.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::kind::JsonKind;
use crate::path::InstancePath;

/// A single validation violation.
///
/// Ordered and hashable so a validation result can be a set: duplicate
/// findings collapse and callers get no ordering guarantee beyond what
/// the set type itself provides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Diagnostic {
    path: InstancePath,
    message: String,
}

impl Diagnostic {
    /// The instance's runtime kind is not in the declared type set.
    pub fn wrong_type(path: InstancePath, actual: JsonKind, expected: &[JsonKind]) -> Self {
        let expected = expected
            .iter()
            .map(|k| k.name())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            path,
            message: format!("{actual} found, {expected} expected"),
        }
    }

    /// A property named in `required` is absent. The path already points
    /// at the missing property, not at its parent object.
    pub fn missing_required(path: InstancePath) -> Self {
        Self {
            path,
            message: "is missing but it is required".to_string(),
        }
    }

    /// A property not declared in `properties` appeared while the schema
    /// forbids additional properties.
    pub fn additional_property(path: InstancePath) -> Self {
        Self {
            path,
            message: "is not defined in the schema and the schema does not allow additional properties"
                .to_string(),
        }
    }

    /// The array exceeds its `maxItems` bound.
    pub fn max_items(path: InstancePath, bound: u64) -> Self {
        Self {
            path,
            message: format!("there must be a maximum of {bound} items in the array"),
        }
    }

    /// The array falls short of its `minItems` bound.
    pub fn min_items(path: InstancePath, bound: u64) -> Self {
        Self {
            path,
            message: format!("there must be a minimum of {bound} items in the array"),
        }
    }

    /// The value matches no member of the `enum` set.
    pub fn enum_mismatch(path: InstancePath, allowed: &[Value]) -> Self {
        Self {
            path,
            message: format!(
                "does not have a value in the enumeration {}",
                render_enum_values(allowed)
            ),
        }
    }

    /// The location of the violation within the instance.
    pub fn path(&self) -> &InstancePath {
        &self.path
    }

    /// The message text, without the path prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Render an enumeration as `[a, b, c]`: strings unquoted, every other
/// literal in its JSON form.
fn render_enum_values(values: &[Value]) -> String {
    let mut out = String::from("[");
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        match value {
            Value::String(s) => out.push_str(s),
            other => out.push_str(&other.to_string()),
        }
    }
    out.push(']');
    out
}
