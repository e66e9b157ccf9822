//! Ledger-read collaborator.
//!
//! The engine only reads. Implementations return [`ExError`] so upstream
//! failures reach callers unchanged; the engine never retries.

use crate::errors::{ExError, ExErrorKind, ProofLedgerError, Result};
use crate::model::RawRecord;

/// Read access to an append-only record set
///
/// A record's index is its position in the ledger. `get_one` must fail with
/// `NotFound` for any index outside `[0, count())`.
pub trait LedgerReader {
    fn count(&self) -> Result<u64>;

    /// Full contents in append order
    fn get_all(&self) -> Result<Vec<RawRecord>>;

    fn get_one(&self, index: u64) -> Result<RawRecord>;
}

impl<T: LedgerReader + ?Sized> LedgerReader for &T {
    fn count(&self) -> Result<u64> {
        (**self).count()
    }

    fn get_all(&self) -> Result<Vec<RawRecord>> {
        (**self).get_all()
    }

    fn get_one(&self, index: u64) -> Result<RawRecord> {
        (**self).get_one(index)
    }
}

/// Vector-backed ledger
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    records: Vec<RawRecord>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from records whose indices are already `0..n` in order
    ///
    /// # Errors
    ///
    /// `InvalidSnapshot` if any record's index differs from its position.
    pub fn from_records(records: Vec<RawRecord>) -> Result<Self> {
        if let Some((position, record)) = records
            .iter()
            .enumerate()
            .find(|(position, record)| record.index != *position as u64)
        {
            return Err(ExError::new(ExErrorKind::InvalidSnapshot)
                .with_op("from_records")
                .with_index(record.index)
                .with_message(format!(
                    "record at position {} carries index {}",
                    position, record.index
                )));
        }
        Ok(Self { records })
    }

    /// Append a record, assigning the next index
    pub fn append(
        &mut self,
        owner: impl Into<String>,
        content_id: impl Into<String>,
        title: impl Into<String>,
        timestamp: i64,
    ) -> u64 {
        let index = self.records.len() as u64;
        self.records
            .push(RawRecord::new(index, owner, content_id, title, timestamp));
        index
    }
}

impl LedgerReader for InMemoryLedger {
    fn count(&self) -> Result<u64> {
        Ok(self.records.len() as u64)
    }

    fn get_all(&self) -> Result<Vec<RawRecord>> {
        Ok(self.records.clone())
    }

    fn get_one(&self, index: u64) -> Result<RawRecord> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.records.get(i))
            .cloned()
            .ok_or_else(|| {
                ExError::from(ProofLedgerError::ProofNotFound {
                    index,
                    count: self.records.len() as u64,
                })
                .with_op("get_one")
            })
    }
}
