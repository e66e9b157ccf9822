//! Canonical schema constants for structured logging and events
//!
//! Every log line emitted by the query layer and the store uses these keys so
//! that downstream log processing can rely on stable names.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Record identifiers
pub const FIELD_LEFT_INDEX: &str = "left_index";
pub const FIELD_RIGHT_INDEX: &str = "right_index";

// Collection sizes
pub const FIELD_LINEAGE_COUNT: &str = "lineage_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";
pub const FIELD_ERR_INDEX: &str = "err_index";
pub const FIELD_ERR_CATEGORY: &str = "err_category";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
