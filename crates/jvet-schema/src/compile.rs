//! # Schema Compilation
//!
//! Parses a draft-4 style schema document into an immutable [`SchemaNode`]
//! tree. Keyword semantics are resolved exactly once here, so repeated
//! validation calls against the same schema never re-inspect the schema
//! text.
//!
//! ## Contract
//!
//! Compilation is pure and total over well-formed input: no I/O, no
//! external state, and no partial trees — a structurally invalid schema
//! (wrong JSON type for a keyword, negative bound, non-string type name)
//! aborts the whole `compile` call with a [`SchemaError`] naming the
//! offending keyword and its location within the schema document.
//!
//! Unrecognized keywords are ignored, per draft-4. Tuple-form `items`
//! arrays are not supported and are rejected at compile time.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;
use thiserror::Error;

use jvet_core::JsonKind;

/// Error during schema compilation.
///
/// The `location` in each variant is a `#/`-rooted pointer to the
/// sub-schema that failed, e.g. `#/properties/caseData/items`.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A (sub-)schema was not a JSON object.
    #[error("schema at '{location}' must be an object, found {found}")]
    NotAnObject {
        /// Pointer to the offending sub-schema.
        location: String,
        /// The kind that was found instead.
        found: JsonKind,
    },

    /// `type` was not a string or a non-empty array of strings.
    #[error("'type' at '{location}' must be a string or a non-empty array of strings")]
    InvalidType {
        /// Pointer to the offending sub-schema.
        location: String,
    },

    /// `type` named something that is not a draft-4 primitive type.
    #[error("'type' at '{location}' names unknown type '{name}'")]
    UnknownTypeName {
        /// Pointer to the offending sub-schema.
        location: String,
        /// The unrecognized type name.
        name: String,
    },

    /// `required` was not an array of strings.
    #[error("'required' at '{location}' must be an array of strings")]
    InvalidRequired {
        /// Pointer to the offending sub-schema.
        location: String,
    },

    /// `properties` was not an object.
    #[error("'properties' at '{location}' must be an object")]
    InvalidProperties {
        /// Pointer to the offending sub-schema.
        location: String,
    },

    /// `additionalProperties` was not a boolean or an object.
    #[error("'additionalProperties' at '{location}' must be a boolean or an object")]
    InvalidAdditionalProperties {
        /// Pointer to the offending sub-schema.
        location: String,
    },

    /// `items` was not a schema object (tuple form is unsupported).
    #[error("'items' at '{location}' must be a schema object")]
    InvalidItems {
        /// Pointer to the offending sub-schema.
        location: String,
    },

    /// `minItems`/`maxItems` was not a non-negative integer.
    #[error("'{keyword}' at '{location}' must be a non-negative integer")]
    InvalidBound {
        /// Which bound keyword was malformed.
        keyword: &'static str,
        /// Pointer to the offending sub-schema.
        location: String,
    },

    /// `enum` was not a non-empty array.
    #[error("'enum' at '{location}' must be a non-empty array")]
    InvalidEnum {
        /// Pointer to the offending sub-schema.
        location: String,
    },
}

/// The tri-state `additionalProperties` keyword.
#[derive(Debug, Clone, Default)]
pub enum AdditionalProperties {
    /// `true` or absent: undeclared properties pass unchecked.
    #[default]
    Allowed,
    /// `false`: every undeclared property is a violation.
    Forbidden,
    /// An object: undeclared properties are validated against this schema.
    Schema(Box<SchemaNode>),
}

/// The compiled form of one schema (sub-)object: a closed set of
/// constraints resolved from the keyword text, evaluated by the engine in
/// `validate.rs`.
///
/// # Invariants
///
/// - Immutable once constructed; child nodes are owned exclusively
///   (a tree, no sharing, no cycles).
/// - An empty `types` set means the node imposes no type constraint.
///
/// ## Thread Safety
///
/// `SchemaNode` is `Send + Sync` — an owned immutable tree. One compiled
/// schema can be shared by any number of concurrent validation calls
/// without coordination.
#[derive(Debug, Clone, Default)]
pub struct SchemaNode {
    /// Allowed primitive kinds, in declaration order. Empty means any.
    pub(crate) types: Vec<JsonKind>,
    /// Property names that must be present on object instances.
    pub(crate) required: BTreeSet<String>,
    /// Child schemas for declared properties.
    pub(crate) properties: BTreeMap<String, SchemaNode>,
    /// Policy for properties not declared in `properties`.
    pub(crate) additional: AdditionalProperties,
    /// Child schema applied to every array element.
    pub(crate) items: Option<Box<SchemaNode>>,
    /// Lower bound on array length.
    pub(crate) min_items: Option<u64>,
    /// Upper bound on array length.
    pub(crate) max_items: Option<u64>,
    /// Allowed literal values, compared by structural equality.
    pub(crate) enum_values: Option<Vec<Value>>,
}

/// Compile a schema document into an immutable [`SchemaNode`] tree.
///
/// # Errors
///
/// Returns a [`SchemaError`] naming the malformed keyword and its
/// location if the document is not structurally valid for a schema.
pub fn compile(schema: &Value) -> Result<SchemaNode, SchemaError> {
    compile_at(schema, "#")
}

fn compile_at(schema: &Value, location: &str) -> Result<SchemaNode, SchemaError> {
    let fields = schema.as_object().ok_or_else(|| SchemaError::NotAnObject {
        location: location.to_string(),
        found: JsonKind::of(schema),
    })?;

    let mut node = SchemaNode::default();

    if let Some(type_value) = fields.get("type") {
        node.types = compile_types(type_value, location)?;
    }

    if let Some(required) = fields.get("required") {
        let names = required
            .as_array()
            .ok_or_else(|| SchemaError::InvalidRequired {
                location: location.to_string(),
            })?;
        for name in names {
            let name = name.as_str().ok_or_else(|| SchemaError::InvalidRequired {
                location: location.to_string(),
            })?;
            node.required.insert(name.to_string());
        }
    }

    if let Some(properties) = fields.get("properties") {
        let map = properties
            .as_object()
            .ok_or_else(|| SchemaError::InvalidProperties {
                location: location.to_string(),
            })?;
        for (key, child) in map {
            let child_location = format!("{location}/properties/{key}");
            node.properties
                .insert(key.clone(), compile_at(child, &child_location)?);
        }
    }

    match fields.get("additionalProperties") {
        None | Some(Value::Bool(true)) => {}
        Some(Value::Bool(false)) => node.additional = AdditionalProperties::Forbidden,
        Some(child @ Value::Object(_)) => {
            let child_location = format!("{location}/additionalProperties");
            node.additional =
                AdditionalProperties::Schema(Box::new(compile_at(child, &child_location)?));
        }
        Some(_) => {
            return Err(SchemaError::InvalidAdditionalProperties {
                location: location.to_string(),
            })
        }
    }

    if let Some(items) = fields.get("items") {
        if !items.is_object() {
            return Err(SchemaError::InvalidItems {
                location: location.to_string(),
            });
        }
        let child_location = format!("{location}/items");
        node.items = Some(Box::new(compile_at(items, &child_location)?));
    }

    node.min_items = compile_bound(fields.get("minItems"), "minItems", location)?;
    node.max_items = compile_bound(fields.get("maxItems"), "maxItems", location)?;

    if let Some(enum_value) = fields.get("enum") {
        let allowed = enum_value
            .as_array()
            .filter(|a| !a.is_empty())
            .ok_or_else(|| SchemaError::InvalidEnum {
                location: location.to_string(),
            })?;
        node.enum_values = Some(allowed.clone());
    }

    Ok(node)
}

/// Normalize the `type` keyword into a kind set, declaration order
/// preserved (the order shows up verbatim in wrong-type diagnostics).
fn compile_types(value: &Value, location: &str) -> Result<Vec<JsonKind>, SchemaError> {
    let parse = |name: &str| {
        JsonKind::from_name(name).ok_or_else(|| SchemaError::UnknownTypeName {
            location: location.to_string(),
            name: name.to_string(),
        })
    };

    match value {
        Value::String(name) => Ok(vec![parse(name)?]),
        Value::Array(names) if !names.is_empty() => {
            let mut kinds = Vec::with_capacity(names.len());
            for name in names {
                let name = name.as_str().ok_or_else(|| SchemaError::InvalidType {
                    location: location.to_string(),
                })?;
                let kind = parse(name)?;
                if !kinds.contains(&kind) {
                    kinds.push(kind);
                }
            }
            Ok(kinds)
        }
        _ => Err(SchemaError::InvalidType {
            location: location.to_string(),
        }),
    }
}

fn compile_bound(
    value: Option<&Value>,
    keyword: &'static str,
    location: &str,
) -> Result<Option<u64>, SchemaError> {
    match value {
        None => Ok(None),
        Some(v) => v
            .as_u64()
            .map(Some)
            .ok_or_else(|| SchemaError::InvalidBound {
                keyword,
                location: location.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_schema_imposes_nothing() {
        let node = compile(&json!({})).unwrap();
        assert!(node.types.is_empty());
        assert!(node.required.is_empty());
        assert!(node.properties.is_empty());
        assert!(matches!(node.additional, AdditionalProperties::Allowed));
        assert!(node.items.is_none());
        assert_eq!(node.min_items, None);
        assert_eq!(node.max_items, None);
        assert!(node.enum_values.is_none());
    }

    #[test]
    fn test_compile_full_schema() {
        let node = compile(&json!({
            "type": "object",
            "required": ["caseType"],
            "properties": {
                "caseType": {"type": "string"},
                "caseData": {
                    "type": "array",
                    "maxItems": 2,
                    "items": {"type": "object"}
                }
            },
            "additionalProperties": false
        }))
        .unwrap();

        assert_eq!(node.types, vec![JsonKind::Object]);
        assert!(node.required.contains("caseType"));
        assert!(matches!(node.additional, AdditionalProperties::Forbidden));

        let case_data = &node.properties["caseData"];
        assert_eq!(case_data.max_items, Some(2));
        assert!(case_data.items.is_some());
    }

    #[test]
    fn test_type_array_preserves_order_and_dedupes() {
        let node = compile(&json!({"type": ["string", "integer", "string"]})).unwrap();
        assert_eq!(node.types, vec![JsonKind::String, JsonKind::Integer]);
    }

    #[test]
    fn test_additional_properties_schema_form() {
        let node = compile(&json!({
            "additionalProperties": {"type": "string"}
        }))
        .unwrap();
        match &node.additional {
            AdditionalProperties::Schema(child) => {
                assert_eq!(child.types, vec![JsonKind::String]);
            }
            other => panic!("Expected Schema form, got: {other:?}"),
        }
    }

    #[test]
    fn test_schema_not_an_object() {
        let err = compile(&json!([1, 2])).unwrap_err();
        match err {
            SchemaError::NotAnObject { location, found } => {
                assert_eq!(location, "#");
                assert_eq!(found, JsonKind::Array);
            }
            other => panic!("Expected NotAnObject, got: {other}"),
        }
    }

    #[test]
    fn test_nested_schema_not_an_object_reports_location() {
        let err = compile(&json!({"properties": {"a": 3}})).unwrap_err();
        match err {
            SchemaError::NotAnObject { location, .. } => {
                assert_eq!(location, "#/properties/a");
            }
            other => panic!("Expected NotAnObject, got: {other}"),
        }
    }

    #[test]
    fn test_invalid_type_keyword() {
        assert!(matches!(
            compile(&json!({"type": 7})).unwrap_err(),
            SchemaError::InvalidType { .. }
        ));
        assert!(matches!(
            compile(&json!({"type": []})).unwrap_err(),
            SchemaError::InvalidType { .. }
        ));
        assert!(matches!(
            compile(&json!({"type": "decimal"})).unwrap_err(),
            SchemaError::UnknownTypeName { .. }
        ));
    }

    #[test]
    fn test_invalid_required_keyword() {
        assert!(matches!(
            compile(&json!({"required": "caseType"})).unwrap_err(),
            SchemaError::InvalidRequired { .. }
        ));
        assert!(matches!(
            compile(&json!({"required": ["ok", 3]})).unwrap_err(),
            SchemaError::InvalidRequired { .. }
        ));
    }

    #[test]
    fn test_invalid_properties_keyword() {
        assert!(matches!(
            compile(&json!({"properties": []})).unwrap_err(),
            SchemaError::InvalidProperties { .. }
        ));
    }

    #[test]
    fn test_invalid_additional_properties_keyword() {
        assert!(matches!(
            compile(&json!({"additionalProperties": "no"})).unwrap_err(),
            SchemaError::InvalidAdditionalProperties { .. }
        ));
    }

    #[test]
    fn test_tuple_items_rejected() {
        let err = compile(&json!({"items": [{"type": "string"}]})).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidItems { .. }));
    }

    #[test]
    fn test_invalid_bounds() {
        for bad in [json!({"maxItems": -1}), json!({"maxItems": 1.5}), json!({"maxItems": "2"})] {
            let err = compile(&bad).unwrap_err();
            match err {
                SchemaError::InvalidBound { keyword, .. } => assert_eq!(keyword, "maxItems"),
                other => panic!("Expected InvalidBound, got: {other}"),
            }
        }
        assert!(matches!(
            compile(&json!({"minItems": -3})).unwrap_err(),
            SchemaError::InvalidBound { keyword: "minItems", .. }
        ));
        // Zero is a legal bound.
        let node = compile(&json!({"maxItems": 0, "minItems": 0})).unwrap();
        assert_eq!(node.max_items, Some(0));
        assert_eq!(node.min_items, Some(0));
    }

    #[test]
    fn test_invalid_enum_keyword() {
        assert!(matches!(
            compile(&json!({"enum": "EMAIL"})).unwrap_err(),
            SchemaError::InvalidEnum { .. }
        ));
        assert!(matches!(
            compile(&json!({"enum": []})).unwrap_err(),
            SchemaError::InvalidEnum { .. }
        ));
    }

    #[test]
    fn test_unrecognized_keywords_ignored() {
        // Draft-4 behavior: unknown keywords are annotations, not errors.
        let node = compile(&json!({
            "type": "string",
            "description": "free text",
            "x-internal": true
        }))
        .unwrap();
        assert_eq!(node.types, vec![JsonKind::String]);
    }
}
