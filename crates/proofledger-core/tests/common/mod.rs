use proofledger_core::errors::{ExError, ProofLedgerError, Result};
use proofledger_core::{DecodedRecord, InMemoryLedger, LedgerReader, RawRecord};

pub const OWNER: &str = "0xAbCdEf0000000000000000000000000000000001";

/// Decoded record owned by [`OWNER`]
#[allow(dead_code)]
pub fn decoded(index: u64, title: &str, timestamp: i64) -> DecodedRecord {
    DecodedRecord::from_raw(RawRecord::new(
        index,
        OWNER,
        format!("bafy{index:04}"),
        title,
        timestamp,
    ))
}

/// Ledger built from `(owner, title, timestamp)` rows in append order
#[allow(dead_code)]
pub fn ledger(rows: &[(&str, &str, i64)]) -> InMemoryLedger {
    let mut ledger = InMemoryLedger::new();
    for (i, (owner, title, timestamp)) in rows.iter().enumerate() {
        ledger.append(*owner, format!("bafy{i:04}"), *title, *timestamp);
    }
    ledger
}

/// Reader whose every call fails as an unavailable upstream would
#[allow(dead_code)]
pub struct UnavailableLedger;

impl LedgerReader for UnavailableLedger {
    fn count(&self) -> Result<u64> {
        Err(unavailable())
    }

    fn get_all(&self) -> Result<Vec<RawRecord>> {
        Err(unavailable())
    }

    fn get_one(&self, _index: u64) -> Result<RawRecord> {
        Err(unavailable())
    }
}

fn unavailable() -> ExError {
    ProofLedgerError::Upstream {
        message: "rpc endpoint timed out".to_string(),
    }
    .into()
}

/// Reader that panics on use; proves validation runs before any fetch
#[allow(dead_code)]
pub struct UntouchableLedger;

impl LedgerReader for UntouchableLedger {
    fn count(&self) -> Result<u64> {
        panic!("ledger must not be read")
    }

    fn get_all(&self) -> Result<Vec<RawRecord>> {
        panic!("ledger must not be read")
    }

    fn get_one(&self, _index: u64) -> Result<RawRecord> {
        panic!("ledger must not be read")
    }
}
