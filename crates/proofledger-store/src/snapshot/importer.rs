//! Snapshot importer orchestration
//!
//! Mirrors a validated snapshot into `proof_records`. The mirror is
//! append-only: records already present must match the snapshot exactly and
//! only records past the current count are inserted.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, snapshot_divergence, Result};
use crate::repo::SqliteLedger;
use crate::snapshot::format_v0::LedgerSnapshotV0;
use crate::snapshot::{compute_snapshot_digest, parse_snapshot_file, parse_snapshot_str, provenance};
use proofledger_core::{log_op_end, log_op_error, log_op_start, RawRecord};
use std::path::Path;

/// Result of one import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub snapshot_digest: String,
    pub record_count: u64,
    /// Records newly written to the mirror
    pub appended: u64,
    /// The same snapshot digest had been imported before; nothing was written
    pub already_imported: bool,
}

/// Import a snapshot file into the mirror
///
/// This is the main entry point for snapshot import. It:
/// 1. Parses and validates the snapshot YAML
/// 2. Computes the snapshot digest and skips known digests
/// 3. Checks already-mirrored records against the snapshot
/// 4. Appends the remaining records and records provenance in one transaction
pub fn import_snapshot(path: &Path, ledger: &mut SqliteLedger) -> Result<ImportOutcome> {
    log_op_start!("snapshot_import");
    let start = std::time::Instant::now();

    let result = parse_snapshot_file(path)
        .and_then(|snapshot| apply_snapshot(&snapshot, ledger))
        .map_err(|e| {
            log_op_error!(
                "snapshot_import",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "snapshot_import",
        duration_ms = start.elapsed().as_millis() as u64,
        appended = result.appended
    );
    Ok(result)
}

/// Import a snapshot held in memory
pub fn import_snapshot_str(content: &str, ledger: &mut SqliteLedger) -> Result<ImportOutcome> {
    let snapshot = parse_snapshot_str(content)?;
    apply_snapshot(&snapshot, ledger)
}

fn apply_snapshot(snapshot: &LedgerSnapshotV0, ledger: &mut SqliteLedger) -> Result<ImportOutcome> {
    let snapshot_digest = compute_snapshot_digest(snapshot);
    let record_count = snapshot.records.len() as u64;

    if provenance::find_import(ledger.connection(), &snapshot_digest)?.is_some() {
        tracing::debug!(digest = %snapshot_digest, "snapshot already imported");
        return Ok(ImportOutcome {
            snapshot_digest,
            record_count,
            appended: 0,
            already_imported: true,
        });
    }

    let tx = ledger
        .connection_mut()
        .transaction()
        .map_err(from_rusqlite)?;

    let mirrored = SqliteLedger::count_records(&tx)?;
    let mut appended = 0u64;

    for record in &snapshot.records {
        let raw = RawRecord::from(record);
        if record.index < mirrored {
            match SqliteLedger::find_record(&tx, record.index)? {
                Some(existing) if existing == raw => continue,
                _ => return Err(snapshot_divergence(record.index)),
            }
        }
        SqliteLedger::insert_record(&tx, &raw)?;
        appended += 1;
    }

    provenance::record_import_tx(
        &tx,
        &snapshot_digest,
        &snapshot.network,
        record_count,
        appended,
    )?;

    tx.commit().map_err(from_rusqlite)?;

    Ok(ImportOutcome {
        snapshot_digest,
        record_count,
        appended,
        already_imported: false,
    })
}
