//! Human-readable summary renderer for proof comparisons.

use crate::model::{IndicatorKind, IndicatorStatus, ProofComparison};

/// Render a Markdown summary of a [`ProofComparison`]
///
/// Informational only; the structured comparison is the source of truth.
pub fn render_human_summary(cmp: &ProofComparison) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "## Proof #{} vs Proof #{}\n\n",
        cmp.left.index, cmp.right.index
    ));
    out.push_str(&format!(
        "**Overall**: {}\n\n",
        status_label(cmp.worst_status())
    ));

    out.push_str("### Fields\n\n");
    out.push_str("| Field | Left | Right | |\n|---|---|---|---|\n");
    for diff in &cmp.differences {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            diff.field,
            cell(&diff.left_value),
            cell(&diff.right_value),
            if diff.is_different { "≠" } else { "=" }
        ));
    }
    out.push('\n');

    out.push_str("### Trust Indicators\n\n");
    for indicator in &cmp.indicators {
        out.push_str(&format!(
            "- **{}** [{}]: {}\n",
            kind_label(indicator.kind),
            indicator.status.as_str(),
            indicator.message
        ));
    }
    out.push('\n');

    let s = &cmp.summary;
    out.push_str("### Summary\n\n");
    out.push_str(&format!("- Same authority: {}\n", yes_no(s.same_authority)));
    out.push_str(&format!(
        "- Valid reference: {}\n",
        yes_no(s.valid_reference)
    ));
    out.push_str(&format!(
        "- Time difference: {}s ({} is newer)\n",
        s.time_difference_seconds,
        if !s.chronological_order {
            "neither"
        } else if s.left_is_newer {
            "left"
        } else {
            "right"
        }
    ));

    out
}

fn kind_label(kind: IndicatorKind) -> &'static str {
    match kind {
        IndicatorKind::Authority => "Authority",
        IndicatorKind::Timestamp => "Timestamp",
        IndicatorKind::Reference => "Reference",
        IndicatorKind::Blockchain => "Ledger",
    }
}

fn status_label(status: IndicatorStatus) -> &'static str {
    match status {
        IndicatorStatus::Verified => "Verified",
        IndicatorStatus::Warning => "Needs review",
        IndicatorStatus::Error => "Failed",
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

// Pipes would break the table row.
fn cell(value: &str) -> String {
    value.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compare;
    use crate::model::{DecodedRecord, RawRecord};

    #[test]
    fn test_summary_mentions_both_indices_and_failed_reference() {
        let a = DecodedRecord::from_raw(RawRecord::new(2, "0xA", "c1", "[MEDICAL] Scan", 10));
        let b = DecodedRecord::from_raw(RawRecord::new(
            5,
            "0xA",
            "c2",
            "[MEDICAL] [Scan] [UPDATE] Scan | redo (ref: 99)",
            20,
        ));
        let text = render_human_summary(&compare(&a, &b));
        assert!(text.contains("Proof #2 vs Proof #5"));
        assert!(text.contains("**Overall**: Failed"));
        assert!(text.contains("**Reference** [error]"));
        assert!(text.contains("Scan \\| redo"));
        assert!(text.contains("(right is newer)"));
    }
}
