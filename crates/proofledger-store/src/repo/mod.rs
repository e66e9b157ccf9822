//! Repository layer over the mirrored ledger

pub mod sqlite_ledger;

pub use sqlite_ledger::SqliteLedger;
