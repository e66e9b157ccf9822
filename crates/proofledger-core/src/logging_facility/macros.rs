//! Operation boundary macros.
//!
//! Every event carries `component`, `op` and `event`; names come from
//! `proofledger_core_types::schema`. Extra `key = value` pairs pass straight
//! through to `tracing`.

/// Entry into a ledger-reading operation
///
/// ```
/// # use proofledger_core::log_op_start;
/// log_op_start!("compare_proofs");
/// log_op_start!("compare_proofs", left_index = 3u64, right_index = 4u64);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        $crate::log_op_start!($op,)
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($field)*
        )
    };
}

/// Successful return, with elapsed milliseconds
///
/// ```
/// # use proofledger_core::log_op_end;
/// log_op_end!("owner_lineages", duration_ms = 3u64, lineage_count = 2u64);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        $crate::log_op_end!($op, duration_ms = $duration,)
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        )
    };
}

/// Failed return
///
/// `$err` is anything convertible into [`ExError`](crate::errors::ExError).
/// Its kind and code are always logged; its ledger index and category only
/// when set.
///
/// ```
/// # use proofledger_core::{log_op_error, errors::ProofLedgerError};
/// let err = ProofLedgerError::ProofNotFound { index: 9, count: 2 };
/// log_op_error!("compare_proofs", err, duration_ms = 1u64);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_index = ex_err.index(),
            err_category = ex_err.category(),
            $($field)*
        );
    }};
}
