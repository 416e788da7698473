//! Error handling

use thiserror::Error;

pub type AppResult<T> = Result<T, ClassifyError>;

/// Errors surfaced by `PhishingEngine::classify`
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("input is empty")]
    EmptyInput,
}

/// Failure of a single classifier attempt.
///
/// Never leaves the engine: the orchestrator turns it into the
/// heuristic fallback (URL) or an UNKNOWN verdict (email).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    #[error("classifier call failed: {0}")]
    Invocation(String),

    #[error("classifier returned malformed output: {0}")]
    Malformed(String),

    #[error("classifier did not answer within {0} ms")]
    Timeout(u64),
}

/// Model artifact loading errors
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("model not found: {0}")]
    NotFound(String),

    #[error("failed to read model: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse model: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("invalid model: {0}")]
    Invalid(String),
}
