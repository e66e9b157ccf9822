//! Comparison output types.
//!
//! All types serialize with snake_case keys; enums serialize lowercase.

use crate::model::record::DecodedRecord;
use serde::{Deserialize, Serialize};

/// One compared attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDifference {
    /// Attribute name (`displayTitle`, `contentId`, ...)
    pub field: String,
    pub left_value: String,
    pub right_value: String,
    pub is_different: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    Authority,
    Timestamp,
    Reference,
    Blockchain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorStatus {
    Verified,
    Warning,
    Error,
}

impl IndicatorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorStatus::Verified => "verified",
            IndicatorStatus::Warning => "warning",
            IndicatorStatus::Error => "error",
        }
    }
}

/// Derived verdict about one aspect of a two-record comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustIndicator {
    pub kind: IndicatorKind,
    pub status: IndicatorStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub same_authority: bool,
    /// True when the two timestamps differ
    pub chronological_order: bool,
    pub valid_reference: bool,
    pub time_difference_seconds: u64,
    pub left_is_newer: bool,
}

/// Full result of comparing two records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofComparison {
    pub left: DecodedRecord,
    pub right: DecodedRecord,
    pub differences: Vec<FieldDifference>,
    pub indicators: Vec<TrustIndicator>,
    pub summary: ComparisonSummary,
}

impl ProofComparison {
    pub fn indicator(&self, kind: IndicatorKind) -> Option<&TrustIndicator> {
        self.indicators.iter().find(|i| i.kind == kind)
    }

    /// Most severe indicator status
    pub fn worst_status(&self) -> IndicatorStatus {
        self.indicators
            .iter()
            .map(|i| i.status)
            .max()
            .unwrap_or(IndicatorStatus::Verified)
    }

    pub fn changed_fields(&self) -> impl Iterator<Item = &FieldDifference> {
        self.differences.iter().filter(|d| d.is_different)
    }
}
