//! Proof comparison command

use crate::commands::{open_ledger, with_context, DEFAULT_DB};
use clap::Args;
use proofledger_core::diff::render_human_summary;
use proofledger_core::queries::{compare_proofs, parse_comparison_params};
use proofledger_core_types::RequestContext;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Ledger index of the left proof
    pub left: String,

    /// Ledger index of the right proof
    pub right: String,

    /// Print a Markdown summary instead of JSON
    #[arg(long)]
    pub human: bool,

    #[arg(long, default_value = DEFAULT_DB)]
    pub db: PathBuf,
}

pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = RequestContext::new();

    // Parameters are validated before the mirror is touched
    let (left, right) = parse_comparison_params(Some(&args.left), Some(&args.right))
        .map_err(|e| with_context(e, &ctx))?;

    let ledger = open_ledger(&args.db)?;
    let comparison = compare_proofs(&ledger, left, right).map_err(|e| with_context(e, &ctx))?;

    if args.human {
        print!("{}", render_human_summary(&comparison));
    } else {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    }
    Ok(())
}
