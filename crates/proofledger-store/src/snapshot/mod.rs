//! Ledger snapshot import
//!
//! Provides:
//! - Snapshot Format v0 schema
//! - YAML parser with validation
//! - Digest canonicalization
//! - Importer orchestration
//! - Provenance tracking

pub mod digest;
pub mod format_v0;
pub mod importer;
pub mod parser;
pub mod provenance;

pub use digest::compute_snapshot_digest;
pub use format_v0::{LedgerSnapshotV0, SnapshotRecord};
pub use importer::{import_snapshot, import_snapshot_str, ImportOutcome};
pub use parser::{parse_snapshot_file, parse_snapshot_str};
