#![allow(clippy::unwrap_used, clippy::expect_used)]

use proofledger_core::codec::slug::{
    decode_slug, encode_slug, resolve_proof_ref, MAX_SAFE_INTEGER, OFFSET,
};
use proofledger_core::errors::ExErrorKind;
use proptest::prelude::*;

#[test]
fn test_zero_encodes_to_base36_of_offset() {
    assert_eq!(OFFSET, 987_653);
    assert_eq!(encode_slug(0).unwrap(), "l62t");
}

#[test]
fn test_small_indices_are_not_sequential_digits() {
    let slugs: Vec<_> = (0..3).map(|i| encode_slug(i).unwrap()).collect();
    assert_eq!(slugs, vec!["l62t", "l62u", "l62v"]);
}

#[test]
fn test_out_of_range_inputs() {
    assert_eq!(
        encode_slug(MAX_SAFE_INTEGER + 1).unwrap_err().kind(),
        ExErrorKind::InvalidInput
    );
    assert_eq!(decode_slug("0"), None);
    assert_eq!(decode_slug("l62s"), None);
}

#[test]
fn test_resolve_numeric_before_slug() {
    assert_eq!(resolve_proof_ref("0").unwrap(), 0);
    assert_eq!(resolve_proof_ref("L62U").unwrap(), 1);
    let err = resolve_proof_ref("proof-7").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidSlug);
    assert_eq!(err.user_message(), "Invalid proof id");
}

proptest! {
    #[test]
    fn prop_slug_round_trip(n in 0..=MAX_SAFE_INTEGER) {
        let slug = encode_slug(n).unwrap();
        prop_assert_eq!(decode_slug(&slug), Some(n));
        prop_assert_eq!(decode_slug(&slug.to_uppercase()), Some(n));
    }

    #[test]
    fn prop_slug_injective(a in 0..=MAX_SAFE_INTEGER, b in 0..=MAX_SAFE_INTEGER) {
        prop_assume!(a != b);
        prop_assert_ne!(encode_slug(a).unwrap(), encode_slug(b).unwrap());
    }

    #[test]
    fn prop_slug_alphabet(n in 0..=MAX_SAFE_INTEGER) {
        let slug = encode_slug(n).unwrap();
        prop_assert!(slug.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
    }
}
