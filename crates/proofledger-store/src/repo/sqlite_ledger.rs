//! SQLite-backed ledger reader
//!
//! Serves `LedgerReader` from the `proof_records` mirror. Records are only
//! ever appended; the mirror never rewrites an index it already holds.

#![allow(clippy::result_large_err)]

use crate::db;
use crate::errors::{from_rusqlite, Result};
use crate::migrations::apply_migrations;
use proofledger_core::errors::{ExError, ProofLedgerError};
use proofledger_core::{LedgerReader, RawRecord};
use rusqlite::{Connection, OptionalExtension, Row};
use std::path::Path;

const SELECT_COLUMNS: &str = "SELECT record_index, owner, content_id, title, timestamp FROM proof_records";

/// Ledger mirror stored in SQLite
pub struct SqliteLedger {
    conn: Connection,
}

impl SqliteLedger {
    /// Open (or create) a mirror database and bring its schema up to date
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut conn = db::open(path)?;
        db::configure(&conn)?;
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// In-memory mirror (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let mut conn = db::open_in_memory()?;
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Append a record at the next index and return that index
    pub fn append(
        &self,
        owner: &str,
        content_id: &str,
        title: &str,
        timestamp: i64,
    ) -> Result<u64> {
        let index = self.count()?;
        Self::insert_record(
            &self.conn,
            &RawRecord::new(index, owner, content_id, title, timestamp),
        )?;
        Ok(index)
    }

    /// Insert a record at its own index
    ///
    /// Fails with `Persistence` if the index is already taken.
    pub fn insert_record(conn: &Connection, record: &RawRecord) -> Result<()> {
        conn.execute(
            "INSERT INTO proof_records (record_index, owner, content_id, title, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                to_sql_index(record.index)?,
                record.owner,
                record.content_id,
                record.title,
                record.timestamp,
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Fetch a record by index, `None` if absent
    pub fn find_record(conn: &Connection, index: u64) -> Result<Option<RawRecord>> {
        let Ok(sql_index) = i64::try_from(index) else {
            return Ok(None);
        };
        conn.query_row(
            &format!("{} WHERE record_index = ?1", SELECT_COLUMNS),
            [sql_index],
            row_to_record,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Number of mirrored records on `conn`
    pub fn count_records(conn: &Connection) -> Result<u64> {
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM proof_records", [], |row| row.get(0))
            .map_err(from_rusqlite)?;
        Ok(count.max(0) as u64)
    }
}

impl LedgerReader for SqliteLedger {
    fn count(&self) -> Result<u64> {
        Self::count_records(&self.conn)
    }

    fn get_all(&self) -> Result<Vec<RawRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY record_index", SELECT_COLUMNS))
            .map_err(from_rusqlite)?;
        let records = stmt
            .query_map([], row_to_record)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(records)
    }

    fn get_one(&self, index: u64) -> Result<RawRecord> {
        match Self::find_record(&self.conn, index)? {
            Some(record) => Ok(record),
            None => Err(ExError::from(ProofLedgerError::ProofNotFound {
                index,
                count: self.count()?,
            })
            .with_op("get_one")),
        }
    }
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<RawRecord> {
    let index: i64 = row.get(0)?;
    Ok(RawRecord {
        index: index.max(0) as u64,
        owner: row.get(1)?,
        content_id: row.get(2)?,
        title: row.get(3)?,
        timestamp: row.get(4)?,
    })
}

fn to_sql_index(index: u64) -> Result<i64> {
    i64::try_from(index).map_err(|_| ProofLedgerError::IndexOutOfRange { index }.into())
}
