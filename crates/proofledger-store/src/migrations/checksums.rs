//! Checksum validation for migrations
//!
//! SHA256 over the migration SQL, recorded when applied and re-checked on
//! every later run.

use sha2::{Digest, Sha256};

/// Compute SHA256 checksum of a string
pub fn compute_checksum(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
