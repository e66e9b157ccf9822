//! Read-only query operations over a ledger reader.

pub mod proof_queries;

pub use proof_queries::{
    all_lineages, compare_proofs, owner_lineages, parse_comparison_params, validate_update,
    OwnerViewOptions, UpdatePlan,
};
