//! Comparison computation.

use crate::model::{
    ComparisonSummary, DecodedRecord, FieldDifference, IndicatorKind, IndicatorStatus,
    ProofComparison, TrustIndicator,
};
use chrono::{DateTime, Local};

const NOT_AVAILABLE: &str = "N/A";
const NO_REFERENCE: &str = "None";

/// Render unix seconds as a local date-time string
///
/// Out-of-range timestamps fall back to the raw number.
pub fn format_timestamp(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|utc| {
            utc.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| timestamp.to_string())
}

/// Compare two decoded records
///
/// The caller guarantees `left.index != right.index`; comparing a record
/// with itself is rejected upstream (see
/// [`parse_comparison_params`](crate::queries::parse_comparison_params)).
pub fn compare(left: &DecodedRecord, right: &DecodedRecord) -> ProofComparison {
    let summary = summarize(left, right);
    ProofComparison {
        left: left.clone(),
        right: right.clone(),
        differences: field_differences(left, right),
        indicators: trust_indicators(left, right, &summary),
        summary,
    }
}

fn field_differences(left: &DecodedRecord, right: &DecodedRecord) -> Vec<FieldDifference> {
    let plain = |field: &str, l: &str, r: &str| FieldDifference {
        field: field.to_string(),
        left_value: l.to_string(),
        right_value: r.to_string(),
        is_different: l != r,
    };

    let lv = left.version.as_deref().unwrap_or(NOT_AVAILABLE);
    let rv = right.version.as_deref().unwrap_or(NOT_AVAILABLE);

    vec![
        plain("displayTitle", &left.display_title, &right.display_title),
        plain("contentId", &left.content_id, &right.content_id),
        FieldDifference {
            field: "owner".to_string(),
            left_value: left.owner.clone(),
            right_value: right.owner.clone(),
            is_different: !left.same_owner(right),
        },
        plain("documentType", &left.document_type, &right.document_type),
        plain("category", &left.category, &right.category),
        plain("version", lv, rv),
        plain(
            "timestamp",
            &format_timestamp(left.timestamp),
            &format_timestamp(right.timestamp),
        ),
    ]
}

fn trust_indicators(
    left: &DecodedRecord,
    right: &DecodedRecord,
    summary: &ComparisonSummary,
) -> Vec<TrustIndicator> {
    let mut indicators = Vec::with_capacity(4);

    indicators.push(TrustIndicator {
        kind: IndicatorKind::Authority,
        status: if summary.same_authority {
            IndicatorStatus::Verified
        } else {
            IndicatorStatus::Warning
        },
        message: if summary.same_authority {
            "Same authority for both proofs".to_string()
        } else {
            "Different authorities - verify legitimacy".to_string()
        },
        left_value: Some(left.owner.clone()),
        right_value: Some(right.owner.clone()),
    });

    indicators.push(TrustIndicator {
        kind: IndicatorKind::Timestamp,
        status: if summary.chronological_order {
            IndicatorStatus::Verified
        } else {
            IndicatorStatus::Warning
        },
        message: if summary.chronological_order {
            format!(
                "Time difference: {} seconds",
                summary.time_difference_seconds
            )
        } else {
            "Identical timestamps - unusual for different proofs".to_string()
        },
        left_value: Some(format_timestamp(left.timestamp)),
        right_value: Some(format_timestamp(right.timestamp)),
    });

    if left.reference_index.is_some() || right.reference_index.is_some() {
        indicators.push(TrustIndicator {
            kind: IndicatorKind::Reference,
            status: if summary.valid_reference {
                IndicatorStatus::Verified
            } else {
                IndicatorStatus::Error
            },
            message: if summary.valid_reference {
                "Valid reference relationship detected".to_string()
            } else {
                "Reference relationship could not be verified".to_string()
            },
            left_value: Some(
                left.reference_index
                    .clone()
                    .unwrap_or_else(|| NO_REFERENCE.to_string()),
            ),
            right_value: Some(
                right
                    .reference_index
                    .clone()
                    .unwrap_or_else(|| NO_REFERENCE.to_string()),
            ),
        });
    }

    // Asserts provenance (both fetched from the ledger), not re-verification
    indicators.push(TrustIndicator {
        kind: IndicatorKind::Blockchain,
        status: IndicatorStatus::Verified,
        message: "Both proofs read from the ledger".to_string(),
        left_value: None,
        right_value: None,
    });

    indicators
}

fn summarize(left: &DecodedRecord, right: &DecodedRecord) -> ComparisonSummary {
    ComparisonSummary {
        same_authority: left.same_owner(right),
        chronological_order: left.timestamp != right.timestamp,
        valid_reference: left.is_referenced_by(right) || right.is_referenced_by(left),
        time_difference_seconds: left.timestamp.abs_diff(right.timestamp),
        left_is_newer: left.timestamp > right.timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawRecord;

    fn rec(index: u64, owner: &str, title: &str, ts: i64) -> DecodedRecord {
        DecodedRecord::from_raw(RawRecord::new(index, owner, format!("cid-{}", index), title, ts))
    }

    #[test]
    fn test_difference_fields_in_fixed_order() {
        let a = rec(0, "0xA", "[MEDICAL] [Scan] MRI", 1000);
        let b = rec(1, "0xA", "[MEDICAL] [Scan] MRI v2", 1500);
        let fields: Vec<_> = compare(&a, &b)
            .differences
            .into_iter()
            .map(|d| d.field)
            .collect();
        assert_eq!(
            fields,
            vec![
                "displayTitle",
                "contentId",
                "owner",
                "documentType",
                "category",
                "version",
                "timestamp"
            ]
        );
    }

    #[test]
    fn test_owner_compared_case_insensitively() {
        let a = rec(0, "0xABCDEF", "[MEDICAL] Scan", 1);
        let b = rec(1, "0xabcdef", "[MEDICAL] Scan", 2);
        let cmp = compare(&a, &b);
        let owner = &cmp.differences[2];
        assert!(!owner.is_different);
        assert_eq!(owner.left_value, "0xABCDEF");
        assert!(cmp.summary.same_authority);
    }

    #[test]
    fn test_missing_version_rendered_as_na() {
        let a = rec(0, "0xA", "[MEDICAL] Scan", 1);
        let b = rec(1, "0xA", "[MEDICAL] Scan v2", 2);
        let version = &compare(&a, &b).differences[5];
        assert_eq!(version.left_value, "N/A");
        assert_eq!(version.right_value, "2");
        assert!(version.is_different);
    }

    #[test]
    fn test_indicators_without_reference() {
        let a = rec(0, "0xA", "[MEDICAL] Scan", 1);
        let b = rec(1, "0xB", "[MEDICAL] Scan", 1);
        let cmp = compare(&a, &b);
        let kinds: Vec<_> = cmp.indicators.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IndicatorKind::Authority,
                IndicatorKind::Timestamp,
                IndicatorKind::Blockchain
            ]
        );
        assert_eq!(cmp.indicators[0].status, IndicatorStatus::Warning);
        assert_eq!(cmp.indicators[1].status, IndicatorStatus::Warning);
        assert_eq!(cmp.indicators[2].status, IndicatorStatus::Verified);
        assert!(!cmp.summary.chronological_order);
        assert_eq!(cmp.worst_status(), IndicatorStatus::Warning);
    }

    #[test]
    fn test_reference_indicator_verified() {
        let a = rec(3, "0xA", "[EDUCATION] [Degree Certificate] BSc CS", 1000);
        let b = rec(
            4,
            "0xA",
            "[EDUCATION] [Degree Certificate] [UPDATE] BSc CS (ref: 3)",
            1500,
        );
        let cmp = compare(&a, &b);
        let reference = cmp.indicator(IndicatorKind::Reference).unwrap();
        assert_eq!(reference.status, IndicatorStatus::Verified);
        assert_eq!(reference.left_value.as_deref(), Some("None"));
        assert_eq!(reference.right_value.as_deref(), Some("3"));
        assert!(cmp.summary.valid_reference);
        assert_eq!(cmp.indicators.len(), 4);
        assert_eq!(cmp.indicators[3].kind, IndicatorKind::Blockchain);
    }

    #[test]
    fn test_timestamp_message_states_delta() {
        let a = rec(0, "0xA", "x", 1000);
        let b = rec(1, "0xA", "y", 1500);
        let cmp = compare(&a, &b);
        assert_eq!(cmp.indicators[1].message, "Time difference: 500 seconds");
        assert_eq!(cmp.summary.time_difference_seconds, 500);
        assert!(!cmp.summary.left_is_newer);
        assert!(compare(&b, &a).summary.left_is_newer);
    }

    #[test]
    fn test_format_timestamp_out_of_range_falls_back() {
        assert_eq!(format_timestamp(i64::MAX), i64::MAX.to_string());
    }
}
