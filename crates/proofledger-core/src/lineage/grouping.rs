//! Lineage grouping.
//!
//! Partitions decoded records into lineages. Within a category there are two
//! modes:
//!
//! - **flat**: no record carries a version token or an update marker; every
//!   record is its own singleton lineage.
//! - **versioned**: records are grouped by base title (display title with
//!   version tokens removed).
//!
//! Every input record ends up in exactly one lineage.

use crate::lineage::ordering::sort_canonical;
use crate::model::{CategoryIndex, DecodedRecord, Lineage};
use regex::Regex;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn embedded_version() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\s*v?[0-9]+(?:\.[0-9]+)*\s*").expect("version pattern is valid")
    })
}

/// Display title with every version-like token removed, then trimmed
///
/// A token takes its surrounding whitespace with it, so `"Lease v2 Annex"`
/// becomes `"LeaseAnnex"` and stays apart from `"Lease Annex"`. Other
/// whitespace is kept as written.
pub fn base_title(display_title: &str) -> String {
    embedded_version()
        .replace_all(display_title, "")
        .trim()
        .to_string()
}

/// True if any record carries a version token or an update marker
pub fn has_versioned_lineages(records: &[DecodedRecord]) -> bool {
    records.iter().any(|r| r.version.is_some() || r.is_update)
}

/// Stable lineage identifier derived from category and grouping key
pub fn lineage_id(category: &str, key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(category.as_bytes());
    hasher.update(b"\n");
    hasher.update(key.as_bytes());
    let digest = hex::encode(hasher.finalize());
    format!("lin_{}", &digest[..16])
}

/// Group the records of one category into lineages
///
/// `category` is trusted; callers pass records that all decoded to it.
/// Lineages are returned oldest-first by `created_at`, ties broken by id.
pub fn group_category(category: &str, mut records: Vec<DecodedRecord>) -> Vec<Lineage> {
    records.sort_by_key(|r| r.index);
    let versioned = has_versioned_lineages(&records);

    let mut lineages: Vec<Lineage> = if versioned {
        let mut groups: BTreeMap<String, Vec<DecodedRecord>> = BTreeMap::new();
        for record in records {
            groups
                .entry(base_title(&record.display_title))
                .or_default()
                .push(record);
        }
        groups
            .into_iter()
            .filter_map(|(base, members)| {
                let id = lineage_id(category, &base);
                build_lineage(id, base, category, members)
            })
            .collect()
    } else {
        records
            .into_iter()
            .filter_map(|record| {
                let id = lineage_id(category, &format!("#{}", record.index));
                let base = base_title(&record.display_title);
                build_lineage(id, base, category, vec![record])
            })
            .collect()
    };

    lineages.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.lineage_id.cmp(&b.lineage_id))
    });

    tracing::debug!(
        category,
        versioned,
        lineage_count = lineages.len(),
        "grouped category"
    );
    lineages
}

/// Partition any record set by category, then group each category
pub fn group_all<I>(records: I) -> CategoryIndex
where
    I: IntoIterator<Item = DecodedRecord>,
{
    let mut by_category: BTreeMap<String, Vec<DecodedRecord>> = BTreeMap::new();
    for record in records {
        by_category
            .entry(record.category.clone())
            .or_default()
            .push(record);
    }
    by_category
        .into_iter()
        .map(|(category, members)| {
            let lineages = group_category(&category, members);
            (category, lineages)
        })
        .collect()
}

/// Find the lineage containing the record with `index`
pub fn find_lineage(index: &CategoryIndex, record_index: u64) -> Option<&Lineage> {
    index
        .values()
        .flatten()
        .find(|lineage| lineage.contains(record_index))
}

// `members` is in ledger order; returns None only for an empty group.
fn build_lineage(
    lineage_id: String,
    base_title: String,
    category: &str,
    mut members: Vec<DecodedRecord>,
) -> Option<Lineage> {
    let first = members.first()?;
    let owner = first.owner.clone();
    let document_type = first.document_type.clone();

    // Latest by timestamp, not by version; later appends win ties.
    let latest = members
        .iter()
        .max_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.index.cmp(&b.index)))?
        .clone();
    let created_at = members.iter().map(|r| r.timestamp).min()?;
    let updated_at = latest.timestamp;

    sort_canonical(&mut members);

    Some(Lineage {
        lineage_id,
        base_title,
        category: category.to_string(),
        document_type,
        versions: members,
        latest,
        created_at,
        updated_at,
        owner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawRecord;

    fn rec(index: u64, title: &str, ts: i64) -> DecodedRecord {
        DecodedRecord::from_raw(RawRecord::new(index, "0xowner", "cid", title, ts))
    }

    #[test]
    fn test_base_title_strips_versions() {
        assert_eq!(base_title("Office Lease v2.0"), "Office Lease");
        assert_eq!(base_title("Office Lease"), "Office Lease");
        assert_eq!(base_title("Lease V3 Annex"), "LeaseAnnex");
        assert_eq!(base_title("v1"), "");
    }

    #[test]
    fn test_base_title_keeps_inner_spacing_distinct() {
        assert_ne!(base_title("Lease v2 Annex"), base_title("Lease Annex"));
        assert_eq!(base_title("Office  Lease"), "Office  Lease");
        assert_ne!(base_title("Office  Lease"), base_title("Office Lease"));

        let records = vec![
            rec(0, "[REAL_ESTATE] [Property Deed] Lease v2 Annex", 100),
            rec(1, "[REAL_ESTATE] [Property Deed] Lease Annex", 200),
            rec(2, "[REAL_ESTATE] [Property Deed] Office  Lease", 300),
            rec(3, "[REAL_ESTATE] [Property Deed] Office Lease", 400),
        ];
        let lineages = group_category("real_estate", records);
        assert_eq!(lineages.len(), 4);
        assert!(lineages.iter().all(|l| l.len() == 1));
    }

    #[test]
    fn test_non_ascii_digits_are_not_versions() {
        assert_eq!(base_title("Lease \u{0663}"), "Lease \u{0663}");
    }

    #[test]
    fn test_lineage_id_is_stable_and_scoped() {
        assert_eq!(lineage_id("medical", "Scan"), lineage_id("medical", "Scan"));
        assert_ne!(lineage_id("medical", "Scan"), lineage_id("education", "Scan"));
        assert!(lineage_id("medical", "Scan").starts_with("lin_"));
    }

    #[test]
    fn test_flat_category_yields_singletons() {
        let records = vec![
            rec(0, "[STARTUP] [Board Resolution] Seed round", 10),
            rec(1, "[STARTUP] [Board Resolution] Seed round", 20),
        ];
        let lineages = group_category("startup", records);
        assert_eq!(lineages.len(), 2);
        assert!(lineages.iter().all(|l| l.versions.len() == 1));
        assert_ne!(lineages[0].lineage_id, lineages[1].lineage_id);
    }

    #[test]
    fn test_versioned_category_groups_by_base_title() {
        let records = vec![
            rec(0, "[REAL_ESTATE] [Property Deed] Office Lease", 100),
            rec(1, "[REAL_ESTATE] [Property Deed] Office Lease v2.0", 200),
            rec(2, "[REAL_ESTATE] [Property Deed] Warehouse Deed", 150),
        ];
        let lineages = group_category("real_estate", records);
        assert_eq!(lineages.len(), 2);

        let lease = &lineages[0];
        assert_eq!(lease.base_title, "Office Lease");
        assert_eq!(lease.indices(), vec![1, 0]); // versioned before unversioned
        assert_eq!(lease.latest.index, 1);
        assert_eq!(lease.created_at, 100);
        assert_eq!(lease.updated_at, 200);

        assert_eq!(lineages[1].base_title, "Warehouse Deed");
    }

    #[test]
    fn test_latest_is_by_timestamp_not_version() {
        let records = vec![
            rec(0, "[MEDICAL] [Scan] MRI v3", 100),
            rec(1, "[MEDICAL] [Scan] MRI v2", 300),
        ];
        let lineages = group_category("medical", records);
        assert_eq!(lineages.len(), 1);
        assert_eq!(lineages[0].latest.index, 1);
        assert_eq!(lineages[0].versions.last().map(|r| r.index), Some(0));
    }

    #[test]
    fn test_update_marker_alone_enables_versioned_mode() {
        let records = vec![
            rec(0, "[EDUCATION] [Degree Certificate] BSc CS", 100),
            rec(1, "[EDUCATION] [Degree Certificate] [UPDATE] BSc CS (ref: 0)", 200),
        ];
        let lineages = group_category("education", records);
        assert_eq!(lineages.len(), 1);
        assert_eq!(lineages[0].versions.len(), 2);
        assert_eq!(lineages[0].latest.index, 1);
    }

    #[test]
    fn test_group_all_partitions_by_category() {
        let records = vec![
            rec(0, "[MEDICAL] Scan", 1),
            rec(1, "No tags at all", 2),
            rec(2, "", 3),
            rec(3, "[MEDICAL] Scan", 4),
        ];
        let index = group_all(records);
        assert_eq!(index.keys().collect::<Vec<_>>(), vec!["general", "medical"]);
        assert_eq!(index["general"].len(), 2);
        assert_eq!(index["medical"].len(), 2);
        assert_eq!(find_lineage(&index, 2).map(|l| l.category.as_str()), Some("general"));
        assert!(find_lineage(&index, 9).is_none());
    }
}
