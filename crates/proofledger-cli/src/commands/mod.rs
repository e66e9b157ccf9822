pub mod compare;
pub mod import;
pub mod lineages;
pub mod slug;
pub mod title;
pub mod update;

use proofledger_core::ExError;
use proofledger_core_types::RequestContext;
use proofledger_store::SqliteLedger;
use std::path::Path;

/// Default location of the local ledger mirror
pub const DEFAULT_DB: &str = ".proofledger/ledger.db";

/// Open the mirror, creating its parent directory if needed
pub fn open_ledger(db: &Path) -> Result<SqliteLedger, Box<dyn std::error::Error>> {
    if let Some(parent) = db.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(SqliteLedger::open(db)?)
}

/// Tag an error with the request it belongs to
pub fn with_context(err: ExError, ctx: &RequestContext) -> ExError {
    let err = err.with_request_id(ctx.request_id.clone());
    match &ctx.trace_id {
        Some(trace_id) => err.with_trace_id(trace_id.clone()),
        None => err,
    }
}
