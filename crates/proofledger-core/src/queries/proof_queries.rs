//! Proof query operations with boundary logging.
//!
//! These are the only engine functions that talk to a [`LedgerReader`]. They
//! own lifecycle logging:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Parameter validation runs before any ledger fetch.

use crate::codec::title::is_deleted_title;
use crate::diff::compare;
use crate::errors::{ProofLedgerError, Result};
use crate::ledger::LedgerReader;
use crate::lineage::group_all;
use crate::model::{CategoryIndex, DecodedRecord, Lineage, ProofComparison};
use crate::registry::CategoryRegistry;
use crate::{log_op_end, log_op_error, log_op_start};
use serde::{Deserialize, Serialize};

/// Filters for owner views
#[derive(Debug, Clone, Default)]
pub struct OwnerViewOptions {
    /// Keep records whose title carries the `[DELETED]` marker
    pub include_deleted: bool,
}

/// What a revision of a lineage must carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePlan {
    pub lineage_id: String,
    pub category: String,
    pub document_type: String,
    pub base_title: String,
    /// Version number the revision should be encoded with
    pub next_version: u32,
    /// Index the revision's `(ref: N)` suffix must point at
    pub reference_index: u64,
}

/// Validate raw comparison identifiers
///
/// Both sides are required, must parse as integers, must be non-negative and
/// must differ.
///
/// # Errors
///
/// - `InvalidInput`: missing, non-numeric or negative identifier
/// - `SelfComparison`: both identifiers name the same record
pub fn parse_comparison_params(left: Option<&str>, right: Option<&str>) -> Result<(u64, u64)> {
    let (left, right) = match (non_blank(left), non_blank(right)) {
        (Some(l), Some(r)) => (l, r),
        _ => return Err(ProofLedgerError::MissingProofId.into()),
    };
    let left = parse_proof_id(left)?;
    let right = parse_proof_id(right)?;
    if left == right {
        return Err(ProofLedgerError::SelfComparison { index: left }.into());
    }
    Ok((left, right))
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_proof_id(raw: &str) -> Result<u64> {
    let value: i64 = raw.parse().map_err(|_| ProofLedgerError::InvalidProofId {
        raw: raw.to_string(),
    })?;
    u64::try_from(value).map_err(|_| {
        ProofLedgerError::NegativeProofId {
            raw: raw.to_string(),
        }
        .into()
    })
}

/// Fetch two records and compare them
///
/// # Errors
///
/// - `SelfComparison`: `left == right` (raised before any fetch)
/// - `NotFound`: either index is outside the ledger
/// - any error the reader raises, unchanged
pub fn compare_proofs<R: LedgerReader + ?Sized>(
    reader: &R,
    left: u64,
    right: u64,
) -> Result<ProofComparison> {
    log_op_start!("compare_proofs", left_index = left, right_index = right);
    let start = std::time::Instant::now();

    let result = compare_proofs_impl(reader, left, right).map_err(|e| {
        log_op_error!(
            "compare_proofs",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            left_index = left,
            right_index = right
        );
        e
    })?;

    log_op_end!(
        "compare_proofs",
        duration_ms = start.elapsed().as_millis() as u64
    );
    Ok(result)
}

fn compare_proofs_impl<R: LedgerReader + ?Sized>(
    reader: &R,
    left: u64,
    right: u64,
) -> Result<ProofComparison> {
    if left == right {
        return Err(ProofLedgerError::SelfComparison { index: left }.into());
    }
    let left = DecodedRecord::from_raw(reader.get_one(left)?);
    let right = DecodedRecord::from_raw(reader.get_one(right)?);
    Ok(compare(&left, &right))
}

/// Lineages of every record owned by `owner`, keyed by category
///
/// Owner matching is case-insensitive. Records marked `[DELETED]` are
/// dropped before grouping unless `opts.include_deleted` is set.
///
/// # Errors
///
/// Any error the reader raises, unchanged.
pub fn owner_lineages<R: LedgerReader + ?Sized>(
    reader: &R,
    owner: &str,
    opts: &OwnerViewOptions,
) -> Result<CategoryIndex> {
    log_op_start!("owner_lineages");
    let start = std::time::Instant::now();

    let result = reader
        .get_all()
        .map(|records| {
            let owner = owner.to_lowercase();
            group_all(
                records
                    .into_iter()
                    .filter(|r| r.owner.to_lowercase() == owner)
                    .filter(|r| opts.include_deleted || !is_deleted_title(&r.title))
                    .map(DecodedRecord::from_raw),
            )
        })
        .map_err(|e| {
            log_op_error!(
                "owner_lineages",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    let lineage_count = result.values().map(Vec::len).sum::<usize>() as u64;
    log_op_end!(
        "owner_lineages",
        duration_ms = start.elapsed().as_millis() as u64,
        lineage_count = lineage_count
    );
    Ok(result)
}

/// Lineages of the whole ledger, keyed by category
///
/// # Errors
///
/// Any error the reader raises, unchanged.
pub fn all_lineages<R: LedgerReader + ?Sized>(
    reader: &R,
    opts: &OwnerViewOptions,
) -> Result<CategoryIndex> {
    let records = reader.get_all()?;
    tracing::debug!(record_count = records.len() as u64, "grouping ledger");
    Ok(group_all(
        records
            .into_iter()
            .filter(|r| opts.include_deleted || !is_deleted_title(&r.title))
            .map(DecodedRecord::from_raw),
    ))
}

/// Check that `lineage` may receive a revision and describe it
///
/// # Errors
///
/// `UpdateNotAllowed` when the registry disallows versioning for the
/// lineage's category.
pub fn validate_update(lineage: &Lineage, registry: &CategoryRegistry) -> Result<UpdatePlan> {
    if !registry.allows_versioning(&lineage.category) {
        return Err(ProofLedgerError::UpdateNotAllowed {
            category: lineage.category.clone(),
        }
        .into());
    }
    let next_version = u32::try_from(lineage.versions.len())
        .unwrap_or(u32::MAX)
        .saturating_add(1);
    Ok(UpdatePlan {
        lineage_id: lineage.lineage_id.clone(),
        category: lineage.category.clone(),
        document_type: lineage.document_type.clone(),
        base_title: lineage.base_title.clone(),
        next_version,
        reference_index: lineage.latest.index,
    })
}
