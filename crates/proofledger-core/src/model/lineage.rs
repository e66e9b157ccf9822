use crate::model::record::DecodedRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Successive revisions of one logical document within a category
///
/// `versions` is in canonical comparator order (oldest first).
/// `latest` is the member with the greatest timestamp, which is not
/// necessarily the member with the greatest version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineage {
    pub lineage_id: String,
    pub base_title: String,
    pub category: String,
    pub document_type: String,
    pub versions: Vec<DecodedRecord>,
    pub latest: DecodedRecord,
    pub created_at: i64,
    pub updated_at: i64,
    pub owner: String,
}

impl Lineage {
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Members newest-first, for list views
    pub fn newest_first(&self) -> Vec<&DecodedRecord> {
        self.versions.iter().rev().collect()
    }

    pub fn contains(&self, index: u64) -> bool {
        self.versions.iter().any(|r| r.index == index)
    }

    /// Ledger indices of all members, in canonical order
    pub fn indices(&self) -> Vec<u64> {
        self.versions.iter().map(|r| r.index).collect()
    }
}

/// Lineages keyed by category, each list in `created_at` order
pub type CategoryIndex = BTreeMap<String, Vec<Lineage>>;
