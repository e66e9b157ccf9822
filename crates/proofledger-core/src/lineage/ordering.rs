//! Canonical version ordering.
//!
//! [`compare_records`] is the only sorting primitive for lineage members.
//! It defines relative order only; callers wanting newest-first reverse the
//! sorted sequence instead of flipping the comparator.

use crate::model::DecodedRecord;
use std::cmp::Ordering;

/// Compare dot-separated numeric version strings component by component
///
/// Missing trailing components count as 0, so `"2"` equals `"2.0"` and
/// sorts before `"2.1"`. Components compare numerically: `"2.10" > "2.2"`.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let parts_a: Vec<&str> = a.split('.').map(component).collect();
    let parts_b: Vec<&str> = b.split('.').map(component).collect();
    let len = parts_a.len().max(parts_b.len());

    (0..len)
        .map(|i| {
            let x = parts_a.get(i).copied().unwrap_or("");
            let y = parts_b.get(i).copied().unwrap_or("");
            compare_digits(x, y)
        })
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

// Significant digits of a component; non-digit components count as 0.
fn component(s: &str) -> &str {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return "";
    }
    s.trim_start_matches('0')
}

// Numeric order on unbounded digit strings without leading zeros
fn compare_digits(x: &str, y: &str) -> Ordering {
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

/// Total order over lineage members
///
/// - both versioned: by version
/// - only one versioned: the versioned record first
/// - neither versioned: by timestamp ascending
pub fn compare_records(a: &DecodedRecord, b: &DecodedRecord) -> Ordering {
    match (a.version.as_deref(), b.version.as_deref()) {
        (Some(va), Some(vb)) => compare_versions(va, vb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.timestamp.cmp(&b.timestamp),
    }
}

/// Sort in canonical (oldest-first) order
///
/// Stable, so records the comparator considers equal keep ledger order when
/// the input is in ledger order.
pub fn sort_canonical(records: &mut [DecodedRecord]) {
    records.sort_by(compare_records);
}

/// Canonical order reversed, for list views
pub fn sort_newest_first(records: &mut [DecodedRecord]) {
    sort_canonical(records);
    records.reverse();
}
