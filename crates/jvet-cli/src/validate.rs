//! # Validate Subcommand
//!
//! Loads a schema and an instance document, runs compile + validate, and
//! prints every diagnostic on its own line. The diagnostic set is ordered,
//! so output is deterministic run to run.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Args;

use jvet_core::Diagnostic;
use jvet_schema::{compile, validate};

use crate::document;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the JSON schema document.
    #[arg(long)]
    pub schema: PathBuf,

    /// Path to the instance document (JSON, or YAML by extension).
    pub instance: PathBuf,
}

/// Run the validation and return the diagnostic set (empty ⇒ conforms).
///
/// Validation findings are printed and returned as ordinary data; only
/// loading and compilation failures abort the run.
pub fn run(args: &ValidateArgs) -> anyhow::Result<BTreeSet<Diagnostic>> {
    let schema_doc = document::load_schema(&args.schema)?;
    let instance = document::load_instance(&args.instance)?;

    let node = compile(&schema_doc)?;
    tracing::debug!(schema = %args.schema.display(), "schema compiled");

    let diagnostics = validate(&node, &instance);
    tracing::info!(
        instance = %args.instance.display(),
        violations = diagnostics.len(),
        "validation complete"
    );

    for diagnostic in &diagnostics {
        println!("{diagnostic}");
    }

    Ok(diagnostics)
}
