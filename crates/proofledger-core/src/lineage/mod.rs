//! Lineage reconstruction: grouping records into version chains and
//! ordering chain members.

pub mod grouping;
pub mod ordering;

pub use grouping::{base_title, find_lineage, group_all, group_category, has_versioned_lineages};
pub use ordering::{compare_records, compare_versions, sort_canonical, sort_newest_first};
