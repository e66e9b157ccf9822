//! Shareable slug form of a ledger index.
//!
//! `slug = base36(index + OFFSET)`. This only makes links non-sequential; it
//! is not access control. Slugs already shared must keep decoding, so
//! `OFFSET` and the alphabet are fixed.

use crate::errors::{ProofLedgerError, Result};

/// Fixed shift applied before base-36 encoding
pub const OFFSET: u64 = 987_653;

/// Largest index accepted, matching the front end's safe-integer range
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Encode a ledger index as a slug
///
/// # Errors
///
/// `IndexOutOfRange` when `index` exceeds [`MAX_SAFE_INTEGER`].
pub fn encode_slug(index: u64) -> Result<String> {
    if index > MAX_SAFE_INTEGER {
        return Err(ProofLedgerError::IndexOutOfRange { index }.into());
    }
    Ok(to_base36(index + OFFSET))
}

/// Decode a slug back to a ledger index
///
/// Returns `None` for empty input, characters outside `[0-9a-z]`
/// (case-insensitive), values below [`OFFSET`], or indices beyond
/// [`MAX_SAFE_INTEGER`].
pub fn decode_slug(slug: &str) -> Option<u64> {
    let slug = slug.trim();
    if slug.is_empty() || !slug.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    let shifted = u64::from_str_radix(&slug.to_ascii_lowercase(), 36).ok()?;
    let index = shifted.checked_sub(OFFSET)?;
    (index <= MAX_SAFE_INTEGER).then_some(index)
}

/// Resolve user input that is either a plain index or a slug
///
/// Plain digits win: `"4"` is index 4, never the slug `"4"`.
///
/// # Errors
///
/// `InvalidSlug` when the input is neither.
pub fn resolve_proof_ref(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(index) = trimmed.parse::<u64>() {
            if index <= MAX_SAFE_INTEGER {
                return Ok(index);
            }
        }
    }
    decode_slug(trimmed).ok_or_else(|| {
        ProofLedgerError::InvalidSlug {
            slug: input.to_string(),
        }
        .into()
    })
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    // Alphabet is ASCII
    String::from_utf8(digits).unwrap_or_default()
}
