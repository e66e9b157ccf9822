//! ProofLedger Store - local SQLite mirror of the proof ledger
//!
//! Provides:
//! - SQLite schema with a checksummed migrations framework
//! - `SqliteLedger`, a `LedgerReader` over the mirrored records
//! - Ledger snapshot (format v0) parser and importer with provenance

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod snapshot;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteLedger;
