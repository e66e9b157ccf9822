//! Two-record comparison engine.
//!
//! ```ignore
//! use proofledger_core::diff::{compare, render_human_summary};
//!
//! let comparison = compare(&left, &right);
//! println!("{}", render_human_summary(&comparison));
//! ```
//!
//! ## Guarantees
//!
//! - **Fixed shape**: seven field differences in a fixed order; the
//!   authority, timestamp and blockchain indicators are always present, the
//!   reference indicator whenever either side names a reference.
//! - **Symmetry**: swapping the inputs swaps every left/right value and
//!   leaves every `is_different` flag unchanged.
//! - **Purity**: no I/O; both records must already be fetched.

pub mod engine;
pub mod human_summary;

pub use engine::{compare, format_timestamp};
pub use human_summary::render_human_summary;
