//! Snapshot parser with validation
//!
//! Parses YAML and validates schema version, index contiguity and record
//! fields

#![allow(clippy::result_large_err)]

use crate::errors::{io_error, snapshot_validation, Result};
use crate::snapshot::format_v0::LedgerSnapshotV0;
use std::fs;
use std::path::Path;

/// Parse a snapshot file from a path
pub fn parse_snapshot_file(path: &Path) -> Result<LedgerSnapshotV0> {
    let content = fs::read_to_string(path).map_err(|e| io_error("snapshot_read", e))?;
    parse_snapshot_str(&content)
}

/// Parse a snapshot from a string
pub fn parse_snapshot_str(content: &str) -> Result<LedgerSnapshotV0> {
    let snapshot: LedgerSnapshotV0 = serde_yaml::from_str(content)
        .map_err(|e| snapshot_validation(&format!("YAML parse error: {}", e)))?;

    validate_snapshot(&snapshot)?;

    Ok(snapshot)
}

/// Validate a parsed snapshot
fn validate_snapshot(snapshot: &LedgerSnapshotV0) -> Result<()> {
    if snapshot.schema_version != 0 {
        return Err(snapshot_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            snapshot.schema_version
        )));
    }

    if snapshot.network.trim().is_empty() {
        return Err(snapshot_validation("Snapshot network must not be empty"));
    }

    // Index is ledger position, so records must run 0, 1, 2, ... in order
    for (position, record) in snapshot.records.iter().enumerate() {
        if record.index != position as u64 {
            return Err(snapshot_validation(&format!(
                "Record at position {} has index {}; indices must be contiguous from 0",
                position, record.index
            ))
            .with_index(record.index));
        }
        if record.owner.trim().is_empty() {
            return Err(
                snapshot_validation(&format!("Record {} has an empty owner", record.index))
                    .with_index(record.index),
            );
        }
        if record.content_id.trim().is_empty() {
            return Err(snapshot_validation(&format!(
                "Record {} has an empty content_id",
                record.index
            ))
            .with_index(record.index));
        }
    }

    Ok(())
}
