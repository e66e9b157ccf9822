//! Provenance tracking for snapshot imports
//!
//! Records one row per distinct snapshot digest in `import_provenance`

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension, Transaction};

/// A recorded snapshot import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    pub snapshot_digest: String,
    pub network: String,
    pub record_count: u64,
    pub appended_count: u64,
    pub imported_at: i64,
}

/// Look up a previous import of `snapshot_digest`
pub fn find_import(conn: &Connection, snapshot_digest: &str) -> Result<Option<ImportRecord>> {
    conn.query_row(
        "SELECT snapshot_digest, network, record_count, appended_count, imported_at
         FROM import_provenance WHERE snapshot_digest = ?1",
        [snapshot_digest],
        |row| {
            let record_count: i64 = row.get(2)?;
            let appended_count: i64 = row.get(3)?;
            Ok(ImportRecord {
                snapshot_digest: row.get(0)?,
                network: row.get(1)?,
                record_count: record_count.max(0) as u64,
                appended_count: appended_count.max(0) as u64,
                imported_at: row.get(4)?,
            })
        },
    )
    .optional()
    .map_err(from_rusqlite)
}

/// Record a completed import within the import transaction
pub fn record_import_tx(
    tx: &Transaction,
    snapshot_digest: &str,
    network: &str,
    record_count: u64,
    appended_count: u64,
) -> Result<()> {
    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO import_provenance
            (snapshot_digest, network, record_count, appended_count, imported_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![
            snapshot_digest,
            network,
            record_count as i64,
            appended_count as i64,
            now
        ],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

/// All recorded imports, oldest first
pub fn list_imports(conn: &Connection) -> Result<Vec<ImportRecord>> {
    let mut stmt = conn
        .prepare("SELECT snapshot_digest FROM import_provenance ORDER BY id")
        .map_err(from_rusqlite)?;
    let digests = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    let mut imports = Vec::with_capacity(digests.len());
    for digest in digests {
        if let Some(record) = find_import(conn, &digest)? {
            imports.push(record);
        }
    }
    Ok(imports)
}
