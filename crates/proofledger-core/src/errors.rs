use proofledger_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using the structured [`ExError`]
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable code that callers can match on without parsing
/// messages. Kinds fall into three user-visible families: validation ("invalid
/// id"), not-found ("no such proof") and upstream ("temporarily unavailable").
/// Title decoding has no kind at all: it never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    SelfComparison,
    InvalidSlug,
    UpdateNotAllowed,

    // Lookup
    NotFound,

    // Collaborators
    UpstreamFailure,
    InvalidSnapshot,
    Configuration,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::SelfComparison => "ERR_SELF_COMPARISON",
            ExErrorKind::InvalidSlug => "ERR_INVALID_SLUG",
            ExErrorKind::UpdateNotAllowed => "ERR_UPDATE_NOT_ALLOWED",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::UpstreamFailure => "ERR_UPSTREAM_FAILURE",
            ExErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            ExErrorKind::Configuration => "ERR_CONFIGURATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// True for caller-side precondition failures, raised before any fetch
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidInput
                | ExErrorKind::SelfComparison
                | ExErrorKind::InvalidSlug
                | ExErrorKind::UpdateNotAllowed
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional context (operation, ledger
/// index, category, correlation ids) for logging and programmatic handling.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    index: Option<u64>,
    category: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            index: None,
            category: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Attach the ledger index the error refers to
    pub fn with_index(mut self, index: u64) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn index(&self) -> Option<u64> {
        self.index
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }

    /// Short, user-facing text that keeps the caller-visible families apart
    pub fn user_message(&self) -> &'static str {
        match self.kind {
            ExErrorKind::UpdateNotAllowed => "Updates are not allowed for this category",
            k if k.is_validation() => "Invalid proof id",
            ExErrorKind::NotFound => "No such proof",
            ExErrorKind::UpstreamFailure | ExErrorKind::Io | ExErrorKind::Persistence => {
                "Ledger temporarily unavailable"
            }
            _ => "Unexpected error",
        }
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(index) = self.index {
            write!(f, " (index: {})", index)?;
        }
        if let Some(category) = &self.category {
            write!(f, " (category: {})", category)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for ProofLedger queries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProofLedgerError {
    // ===== Validation =====
    /// One side of a comparison was not supplied
    #[error("Both left and right proof IDs are required")]
    MissingProofId,

    /// Identifier is not a number
    #[error("Proof IDs must be valid numbers, got {raw:?}")]
    InvalidProofId { raw: String },

    /// Identifier parsed but is negative
    #[error("Proof IDs must be non-negative numbers, got {raw:?}")]
    NegativeProofId { raw: String },

    /// Both sides of a comparison name the same record
    #[error("Cannot compare a proof with itself (index {index})")]
    SelfComparison { index: u64 },

    /// Slug is not a valid encoded index
    #[error("Invalid proof slug: {slug:?}")]
    InvalidSlug { slug: String },

    /// Index is too large to encode as a slug
    #[error("Proof index {index} is out of encodable range")]
    IndexOutOfRange { index: u64 },

    /// Category registry forbids revisions
    #[error("Updates are not allowed for category {category}")]
    UpdateNotAllowed { category: String },

    // ===== Lookup =====
    /// Requested index has no record
    #[error("Proof not found: index {index} (ledger holds {count} records)")]
    ProofNotFound { index: u64, count: u64 },

    // ===== Collaborators =====
    /// Ledger-read collaborator failed
    #[error("Ledger read failed: {message}")]
    Upstream { message: String },

    /// Registry or engine configuration could not be loaded
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// JSON/TOML (de)serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<ProofLedgerError> for ExError {
    fn from(err: ProofLedgerError) -> Self {
        let message = err.to_string();
        match err {
            ProofLedgerError::MissingProofId
            | ProofLedgerError::InvalidProofId { .. }
            | ProofLedgerError::NegativeProofId { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }
            ProofLedgerError::IndexOutOfRange { index } => ExError::new(ExErrorKind::InvalidInput)
                .with_index(index)
                .with_message(message),
            ProofLedgerError::SelfComparison { index } => {
                ExError::new(ExErrorKind::SelfComparison)
                    .with_index(index)
                    .with_message(message)
            }
            ProofLedgerError::InvalidSlug { .. } => {
                ExError::new(ExErrorKind::InvalidSlug).with_message(message)
            }
            ProofLedgerError::UpdateNotAllowed { category } => {
                ExError::new(ExErrorKind::UpdateNotAllowed)
                    .with_category(category)
                    .with_message(message)
            }
            ProofLedgerError::ProofNotFound { index, .. } => ExError::new(ExErrorKind::NotFound)
                .with_index(index)
                .with_message(message),
            ProofLedgerError::Upstream { .. } => {
                ExError::new(ExErrorKind::UpstreamFailure).with_message(message)
            }
            ProofLedgerError::InvalidConfiguration { .. } => {
                ExError::new(ExErrorKind::Configuration).with_message(message)
            }
            ProofLedgerError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for ProofLedgerError {
    fn from(err: serde_json::Error) -> Self {
        ProofLedgerError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        ProofLedgerError::from(err).into()
    }
}
