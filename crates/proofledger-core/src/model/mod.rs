pub mod comparison;
pub mod lineage;
pub mod record;

pub use comparison::{
    ComparisonSummary, FieldDifference, IndicatorKind, IndicatorStatus, ProofComparison,
    TrustIndicator,
};
pub use lineage::{CategoryIndex, Lineage};
pub use record::{DecodedRecord, RawRecord};
