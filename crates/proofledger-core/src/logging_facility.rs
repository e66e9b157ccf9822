//! Structured logging facility for ProofLedger
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! The pure codecs and grouping functions only emit `trace!`/`debug!` events;
//! operation boundaries (start/end/end_error) belong to the query layer and
//! the store, which own the I/O.
//!
//! ```rust
//! use proofledger_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
