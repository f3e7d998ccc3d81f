//! # jvet-schema — Schema Compiler & Validation Engine
//!
//! Compiles draft-4 style JSON Schema documents into immutable constraint
//! trees and validates instance values against them, reporting every
//! violation with its instance path and exact message text.
//!
//! ## Two Layers
//!
//! - [`compile()`] parses a schema document once into a [`SchemaNode`] tree,
//!   resolving keyword semantics up front so repeated validation calls
//!   never re-inspect the schema text. Malformed schemas fail with a
//!   [`SchemaError`]; there are no partial trees.
//! - [`validate()`] walks an instance against a compiled tree depth-first
//!   and returns the full diagnostic set — every violation at every
//!   reachable location, not just the first. An empty set means the
//!   instance conforms.
//!
//! The compiler has no dependency on traversal state; the engine depends
//! only on the compiler's output shape.
//!
//! ## Supported Keywords
//!
//! `type`, `required`, `properties`, `additionalProperties`, `items`
//! (single-schema form), `minItems`, `maxItems`, `enum`. Unrecognized
//! keywords are ignored; `$ref`, combinators, `format`, and `pattern` are
//! out of scope.
//!
//! ## Crate Policy
//!
//! - Depends only on `jvet-core` internally.
//! - Pure with respect to its inputs: no I/O, no shared mutable state.
//!   A compiled [`SchemaNode`] is safely shared by concurrent readers.
//! - Diagnostic message text is a compatibility surface — consumers match
//!   it verbatim. Templates live in `jvet-core::diagnostic`, nowhere else.

pub mod compile;
pub mod validate;

pub use compile::{compile, AdditionalProperties, SchemaError, SchemaNode};
pub use validate::validate;
