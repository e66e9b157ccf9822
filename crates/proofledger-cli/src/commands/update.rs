//! Revision planning command

use crate::commands::{open_ledger, with_context, DEFAULT_DB};
use clap::Args;
use proofledger_core::codec::{encode_update_title, resolve_proof_ref};
use proofledger_core::lineage::find_lineage;
use proofledger_core::queries::{all_lineages, validate_update, OwnerViewOptions};
use proofledger_core::{EngineConfig, ExError, LedgerReader, ProofLedgerError};
use proofledger_core_types::RequestContext;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Ledger index or slug of any version in the lineage
    pub proof: String,

    /// Title for the revision; the lineage's base title when omitted
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, default_value = DEFAULT_DB)]
    pub db: PathBuf,
}

pub fn execute(args: UpdateArgs, config: &EngineConfig) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = RequestContext::new();
    let index = resolve_proof_ref(&args.proof).map_err(|e| with_context(e, &ctx))?;

    let ledger = open_ledger(&args.db)?;
    let registry = config.load_registry()?;

    // Fails with NotFound before grouping the whole ledger
    ledger.get_one(index).map_err(|e| with_context(e, &ctx))?;

    let lineages = all_lineages(
        &ledger,
        &OwnerViewOptions {
            include_deleted: true,
        },
    )
    .map_err(|e| with_context(e, &ctx))?;

    let lineage = find_lineage(&lineages, index).ok_or_else(|| {
        let count = ledger.count().unwrap_or(0);
        with_context(
            ExError::from(ProofLedgerError::ProofNotFound { index, count }).with_op("update"),
            &ctx,
        )
    })?;

    let plan = validate_update(lineage, &registry).map_err(|e| with_context(e, &ctx))?;
    let title = args.title.as_deref().unwrap_or(&plan.base_title);

    println!("{}", serde_json::to_string_pretty(&plan)?);
    println!(
        "{}",
        encode_update_title(&plan.category, &plan.document_type, title, plan.reference_index)
    );
    Ok(())
}
