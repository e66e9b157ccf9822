use crate::codec::title::{decode_title, TitleMetadata};
use serde::{Deserialize, Serialize};

/// One entry of the append-only ledger, exactly as the ledger reports it
///
/// `index` is the record's position in the ledger's enumeration and is never
/// reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub index: u64,
    pub owner: String,
    pub content_id: String,
    pub title: String,
    /// Unix seconds
    pub timestamp: i64,
}

impl RawRecord {
    pub fn new(
        index: u64,
        owner: impl Into<String>,
        content_id: impl Into<String>,
        title: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            index,
            owner: owner.into(),
            content_id: content_id.into(),
            title: title.into(),
            timestamp,
        }
    }
}

/// A raw record plus the metadata recovered from its title
///
/// Recomputed on every read; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedRecord {
    pub index: u64,
    pub owner: String,
    pub content_id: String,
    pub title: String,
    pub timestamp: i64,

    /// Lowercased first bracket tag, `general` when absent
    pub category: String,
    /// Second bracket tag, `Document` when absent
    pub document_type: String,
    pub display_title: String,
    pub is_update: bool,
    /// Ledger index of the superseded record, as written in the title
    pub reference_index: Option<String>,
    pub version: Option<String>,
}

impl DecodedRecord {
    /// Decode a raw record. Total: any title yields a usable record.
    pub fn from_raw(raw: RawRecord) -> Self {
        let TitleMetadata {
            category,
            document_type,
            display_title,
            is_update,
            reference_index,
            version,
        } = decode_title(&raw.title);

        Self {
            index: raw.index,
            owner: raw.owner,
            content_id: raw.content_id,
            title: raw.title,
            timestamp: raw.timestamp,
            category,
            document_type,
            display_title,
            is_update,
            reference_index,
            version,
        }
    }

    /// True when `other` names this record as the one it supersedes
    pub fn is_referenced_by(&self, other: &DecodedRecord) -> bool {
        other.reference_index.as_deref() == Some(self.index.to_string().as_str())
    }

    pub fn same_owner(&self, other: &DecodedRecord) -> bool {
        self.owner.to_lowercase() == other.owner.to_lowercase()
    }
}

impl From<RawRecord> for DecodedRecord {
    fn from(raw: RawRecord) -> Self {
        Self::from_raw(raw)
    }
}
