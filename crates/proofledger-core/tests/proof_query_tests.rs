#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{ledger, UnavailableLedger, UntouchableLedger, OWNER};
use proofledger_core::errors::ExErrorKind;
use proofledger_core::lineage::find_lineage;
use proofledger_core::queries::{
    all_lineages, compare_proofs, owner_lineages, parse_comparison_params, validate_update,
    OwnerViewOptions,
};
use proofledger_core::{CategoryRegistry, LedgerReader};

fn sample_ledger() -> proofledger_core::InMemoryLedger {
    ledger(&[
        (OWNER, "[REAL_ESTATE] [Property Deed] Office Lease", 1_000),
        (OWNER, "[REAL_ESTATE] [Property Deed] Office Lease v2", 1_500),
        ("0x9999", "[MEDICAL] [Prescription Record] Rx", 1_700),
        (
            &OWNER.to_lowercase(),
            "[GOVERNMENT] [Tender Notice] Bridge tender",
            1_800,
        ),
        (OWNER, "[DELETED] [EDUCATION] Transcript", 1_900),
    ])
}

#[test]
fn test_compare_proofs_fetches_and_compares() {
    let ledger = sample_ledger();
    let cmp = compare_proofs(&ledger, 0, 1).unwrap();
    assert_eq!(cmp.left.index, 0);
    assert_eq!(cmp.right.index, 1);
    assert!(cmp.summary.same_authority);
    assert_eq!(cmp.summary.time_difference_seconds, 500);
}

#[test]
fn test_compare_proofs_missing_record_is_not_found() {
    let ledger = sample_ledger();
    let err = compare_proofs(&ledger, 0, 42).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.index(), Some(42));
    assert_eq!(err.user_message(), "No such proof");
}

#[test]
fn test_compare_proofs_upstream_failure_propagates_unchanged() {
    let err = compare_proofs(&UnavailableLedger, 0, 1).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::UpstreamFailure);
    assert!(err.message().contains("rpc endpoint timed out"));
    assert_eq!(err.user_message(), "Ledger temporarily unavailable");
}

#[test]
fn test_self_comparison_rejected_before_fetch() {
    let err = compare_proofs(&UntouchableLedger, 5, 5).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::SelfComparison);

    let err = parse_comparison_params(Some("5"), Some("5")).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::SelfComparison);
}

#[test]
fn test_comparison_params_error_messages() {
    let err = parse_comparison_params(Some("1"), None).unwrap_err();
    assert!(err.message().contains("required"));
    let err = parse_comparison_params(Some("x1"), Some("2")).unwrap_err();
    assert!(err.message().contains("valid numbers"));
    let err = parse_comparison_params(Some("1"), Some("-2")).unwrap_err();
    assert!(err.message().contains("non-negative"));
}

#[test]
fn test_owner_lineages_filters_owner_case_insensitively() {
    let ledger = sample_ledger();
    let index = owner_lineages(&ledger, &OWNER.to_uppercase(), &OwnerViewOptions::default()).unwrap();
    assert_eq!(
        index.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["government", "real_estate"]
    );
    assert_eq!(index["real_estate"].len(), 1);
    assert_eq!(index["real_estate"][0].indices(), vec![1, 0]);
    assert!(find_lineage(&index, 2).is_none());
}

#[test]
fn test_owner_lineages_hides_deleted_unless_requested() {
    let ledger = sample_ledger();
    let hidden = owner_lineages(&ledger, OWNER, &OwnerViewOptions::default()).unwrap();
    assert!(find_lineage(&hidden, 4).is_none());

    let shown = owner_lineages(
        &ledger,
        OWNER,
        &OwnerViewOptions {
            include_deleted: true,
        },
    )
    .unwrap();
    assert_eq!(find_lineage(&shown, 4).unwrap().category, "deleted");
}

#[test]
fn test_all_lineages_covers_every_visible_record() {
    let ledger = sample_ledger();
    let index = all_lineages(&ledger, &OwnerViewOptions::default()).unwrap();
    let total: usize = index.values().flatten().map(|l| l.len()).sum();
    assert_eq!(total as u64, ledger.count().unwrap() - 1);
}

#[test]
fn test_owner_lineages_upstream_failure() {
    let err = owner_lineages(&UnavailableLedger, OWNER, &OwnerViewOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::UpstreamFailure);
}

#[test]
fn test_validate_update_plans_next_revision() {
    let ledger = sample_ledger();
    let index = all_lineages(&ledger, &OwnerViewOptions::default()).unwrap();
    let lease = find_lineage(&index, 0).unwrap();

    let plan = validate_update(lease, &CategoryRegistry::builtin()).unwrap();
    assert_eq!(plan.next_version, 3);
    assert_eq!(plan.reference_index, 1);
    assert_eq!(plan.category, "real_estate");
    assert_eq!(plan.base_title, "Office Lease");
}

#[test]
fn test_validate_update_refused_for_immutable_category() {
    let ledger = sample_ledger();
    let index = all_lineages(&ledger, &OwnerViewOptions::default()).unwrap();
    let tender = find_lineage(&index, 3).unwrap();

    let err = validate_update(tender, &CategoryRegistry::builtin()).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::UpdateNotAllowed);
    assert_eq!(err.category(), Some("government"));
}
