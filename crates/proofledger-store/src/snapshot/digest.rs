//! Snapshot digest canonicalization
//!
//! Computes stable SHA256 digests of snapshots so re-importing the same
//! ledger state is recognised regardless of YAML formatting.

use crate::snapshot::format_v0::LedgerSnapshotV0;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Canonical representation of a snapshot for digest calculation
#[derive(Debug, Serialize)]
struct CanonicalSnapshot<'a> {
    schema_version: u32,
    network: &'a str,
    records: Vec<CanonicalRecord<'a>>,
}

#[derive(Debug, Serialize)]
struct CanonicalRecord<'a> {
    index: u64,
    owner: &'a str,
    content_id: &'a str,
    title: &'a str,
    timestamp: i64,
}

/// Compute a stable digest for a snapshot
///
/// Returns a SHA256 hex digest of the canonical JSON form. Records are
/// ordered by index; timestamps are already normalized to unix seconds.
pub fn compute_snapshot_digest(snapshot: &LedgerSnapshotV0) -> String {
    let mut records: Vec<CanonicalRecord<'_>> = snapshot
        .records
        .iter()
        .map(|r| CanonicalRecord {
            index: r.index,
            owner: &r.owner,
            content_id: &r.content_id,
            title: &r.title,
            timestamp: r.timestamp,
        })
        .collect();
    records.sort_by_key(|r| r.index);

    let canonical = CanonicalSnapshot {
        schema_version: snapshot.schema_version,
        network: &snapshot.network,
        records,
    };

    // Plain structs of strings and integers always serialize
    let json = serde_json::to_string(&canonical).unwrap_or_default();

    hex::encode(Sha256::digest(json.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::parser::parse_snapshot_str;

    #[test]
    fn test_snapshot_digest_format_independent() {
        let yaml1 = r#"
schema_version: 0
network: sepolia
records:
  - index: 0
    owner: "0xA"
    content_id: bafy0
    title: "[MEDICAL] Rx"
    timestamp: 1700000000
"#;

        let yaml2 = r#"
schema_version: 0
network: sepolia
records:
    - { index: 0, owner: "0xA", cid: bafy0, title: "[MEDICAL] Rx", timestamp: "2023-11-14T22:13:20Z" }
"#;

        let digest1 = compute_snapshot_digest(&parse_snapshot_str(yaml1).unwrap());
        let digest2 = compute_snapshot_digest(&parse_snapshot_str(yaml2).unwrap());

        assert_eq!(digest1.len(), 64);
        assert_eq!(digest1, digest2, "Digests should be format-independent");
    }

    #[test]
    fn test_snapshot_digest_sensitive_to_network() {
        let a = parse_snapshot_str("schema_version: 0\nnetwork: sepolia\nrecords: []\n").unwrap();
        let b = parse_snapshot_str("schema_version: 0\nnetwork: mainnet\nrecords: []\n").unwrap();
        assert_ne!(compute_snapshot_digest(&a), compute_snapshot_digest(&b));
    }
}
