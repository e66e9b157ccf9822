//! ProofLedger Core - read-side classification and comparison engine
//!
//! Turns a flat, append-only ledger of titled records into structured
//! views:
//! - Title codec: recovers category, document type, version and update
//!   reference from a record title
//! - Lineage grouping: partitions records into version chains per category
//! - Version ordering: the single comparator used to sort chain members
//! - Comparison engine: field differences and trust indicators for two records
//! - Slug codec: reversible, non-sequential text form of a ledger index
//!
//! The engine never mutates the ledger. Everything except the query layer is
//! pure; [`queries`] reads through a [`ledger::LedgerReader`].

pub mod codec;
pub mod config;
pub mod diff;
pub mod errors;
pub mod ledger;
pub mod lineage;
pub mod logging_facility;
pub mod model;
pub mod queries;
pub mod registry;

// Logging macros resolve field names through this path
pub use proofledger_core_types as core_types;

// Re-export commonly used types
pub use codec::{decode_slug, decode_title, encode_slug, encode_title, TitleMetadata};
pub use config::EngineConfig;
pub use diff::compare;
pub use errors::{ExError, ExErrorKind, ProofLedgerError, Result};
pub use ledger::{InMemoryLedger, LedgerReader};
pub use model::{CategoryIndex, DecodedRecord, Lineage, ProofComparison, RawRecord};
pub use registry::{CategoryConfig, CategoryRegistry};
