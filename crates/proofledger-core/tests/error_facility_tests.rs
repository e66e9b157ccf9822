use proofledger_core::errors::{ExError, ExErrorKind, ProofLedgerError};
use proofledger_core_types::RequestId;

#[test]
fn test_not_found_carries_index() {
    let ex_err: ExError = ProofLedgerError::ProofNotFound { index: 12, count: 4 }.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.index(), Some(12));
    assert!(ex_err.message().contains("ledger holds 4 records"));
}

#[test]
fn test_validation_family_shares_user_message() {
    let errors = vec![
        ProofLedgerError::MissingProofId,
        ProofLedgerError::InvalidProofId {
            raw: "abc".to_string(),
        },
        ProofLedgerError::NegativeProofId {
            raw: "-1".to_string(),
        },
        ProofLedgerError::SelfComparison { index: 2 },
        ProofLedgerError::InvalidSlug {
            slug: "??".to_string(),
        },
    ];
    for err in errors {
        let ex_err: ExError = err.into();
        assert!(ex_err.kind().is_validation(), "{:?}", ex_err.kind());
        assert_eq!(ex_err.user_message(), "Invalid proof id");
    }
}

#[test]
fn test_three_user_facing_families_are_distinct() {
    let invalid: ExError = ProofLedgerError::MissingProofId.into();
    let missing: ExError = ProofLedgerError::ProofNotFound { index: 1, count: 0 }.into();
    let upstream: ExError = ProofLedgerError::Upstream {
        message: "timeout".to_string(),
    }
    .into();

    let messages = [
        invalid.user_message(),
        missing.user_message(),
        upstream.user_message(),
    ];
    assert_eq!(
        messages,
        [
            "Invalid proof id",
            "No such proof",
            "Ledger temporarily unavailable"
        ]
    );
}

#[test]
fn test_update_not_allowed_carries_category() {
    let ex_err: ExError = ProofLedgerError::UpdateNotAllowed {
        category: "government".to_string(),
    }
    .into();
    assert_eq!(ex_err.code(), "ERR_UPDATE_NOT_ALLOWED");
    assert_eq!(ex_err.category(), Some("government"));
    assert!(ex_err.to_string().contains("(category: government)"));
    assert_eq!(
        ex_err.user_message(),
        "Updates are not allowed for this category"
    );
    assert_ne!(ex_err.user_message(), "Invalid proof id");
}

#[test]
fn test_builder_attaches_correlation() {
    let request_id = RequestId::from_string("req-1".to_string());
    let ex_err = ExError::new(ExErrorKind::Internal)
        .with_op("compare_proofs")
        .with_request_id(request_id.clone());
    assert_eq!(ex_err.request_id(), Some(&request_id));
    assert_eq!(ex_err.op(), Some("compare_proofs"));
    assert!(!ex_err.kind().is_validation());
}

#[test]
fn test_serde_json_errors_map_to_serialization() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let ex_err: ExError = json_err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
}
