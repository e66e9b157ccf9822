//! Snapshot import command

use crate::commands::{open_ledger, DEFAULT_DB};
use clap::Args;
use proofledger_store::snapshot::import_snapshot;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to the snapshot YAML file
    pub path: PathBuf,

    #[arg(long, default_value = DEFAULT_DB)]
    pub db: PathBuf,
}

pub fn execute(args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut ledger = open_ledger(&args.db)?;
    let outcome = import_snapshot(&args.path, &mut ledger)?;

    if outcome.already_imported {
        println!("✓ Already imported (digest: {})", outcome.snapshot_digest);
    } else {
        println!(
            "✓ Imported {} of {} records (digest: {})",
            outcome.appended, outcome.record_count, outcome.snapshot_digest
        );
    }
    Ok(())
}
