//! # jvet-core — Foundational Types for jvet
//!
//! This crate defines the value-object vocabulary shared by the schema
//! compiler and the validation engine: JSON kind discrimination, instance
//! location paths, and validation diagnostics. Every other crate in the
//! workspace depends on `jvet-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One rendering path per surface.** `InstancePath` owns `$`/`.key`/
//!    `[index]` rendering; `Diagnostic` owns every message template.
//!    Keyword evaluators compose these, never format text themselves.
//!
//! 2. **Diagnostics are data.** A violation is a value object compared by
//!    structural equality, never a control-flow error. Sets of them
//!    collapse duplicates by construction.
//!
//! 3. **No coercion.** `JsonKind::of` classifies what the instance
//!    actually is; a numeric-looking string is a string, and an integer
//!    literal is an integer even where a `number` would be accepted.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `jvet-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod diagnostic;
pub mod kind;
pub mod path;

// Re-export primary types for ergonomic imports.
pub use diagnostic::Diagnostic;
pub use kind::JsonKind;
pub use path::{InstancePath, PathSegment};
