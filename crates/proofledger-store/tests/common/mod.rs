use proofledger_store::SqliteLedger;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// File-backed mirror in a fresh temp dir; keep the dir alive for the test
#[allow(dead_code)]
pub fn temp_ledger() -> (TempDir, SqliteLedger) {
    let dir = TempDir::new().expect("temp dir");
    let ledger = SqliteLedger::open(dir.path().join("ledger.db")).expect("open ledger");
    (dir, ledger)
}
