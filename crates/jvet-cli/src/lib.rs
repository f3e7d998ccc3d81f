//! # jvet-cli — jvet Command-Line Interface
//!
//! Thin boundary around the engine crates: file loading, the payload
//! size cap, diagnostic printing, and exit codes. The engine itself
//! performs no I/O and knows nothing about files.
//!
//! ## Subcommands
//!
//! - `validate` — validate a JSON/YAML instance document against a
//!   draft-4 JSON schema and print every violation with its path
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `jvet-schema` — no keyword semantics
//!   here.
//! - Diagnostic output is one rendered diagnostic per line, in set order,
//!   so downstream tooling can match lines verbatim.

pub mod document;
pub mod validate;
