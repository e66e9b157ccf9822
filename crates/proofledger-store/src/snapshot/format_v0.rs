//! Ledger Snapshot Format v0 schema
//!
//! A YAML export of the ledger's contents at some point in time:
//!
//! ```yaml
//! schema_version: 0
//! network: sepolia
//! records:
//!   - index: 0
//!     owner: "0xAbC..."
//!     content_id: bafy...
//!     title: "[REAL_ESTATE] [Property Deed] Office Lease"
//!     timestamp: 1700000000
//! ```

use proofledger_core::RawRecord;
use serde::{Deserialize, Serialize};

/// Top-level snapshot file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshotV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Network the snapshot was read from
    pub network: String,

    /// Records in ledger order
    pub records: Vec<SnapshotRecord>,
}

/// One ledger record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub index: u64,
    pub owner: String,
    #[serde(alias = "cid")]
    pub content_id: String,
    pub title: String,
    /// Unix seconds, or an RFC 3339 string
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: i64,
}

impl From<&SnapshotRecord> for RawRecord {
    fn from(record: &SnapshotRecord) -> Self {
        RawRecord::new(
            record.index,
            record.owner.clone(),
            record.content_id.clone(),
            record.title.clone(),
            record.timestamp,
        )
    }
}

/// Normalize integer seconds vs RFC 3339 timestamps
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct TimestampVisitor;

    impl<'de> Visitor<'de> for TimestampVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("unix seconds or an RFC 3339 date-time")
        }

        fn visit_i64<E>(self, value: i64) -> Result<i64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<i64, E>
        where
            E: de::Error,
        {
            i64::try_from(value).map_err(|_| E::custom(format!("timestamp {} out of range", value)))
        }

        fn visit_str<E>(self, value: &str) -> Result<i64, E>
        where
            E: de::Error,
        {
            chrono::DateTime::parse_from_rfc3339(value)
                .map(|dt| dt.timestamp())
                .map_err(|e| E::custom(format!("invalid timestamp {:?}: {}", value, e)))
        }
    }

    deserializer.deserialize_any(TimestampVisitor)
}
