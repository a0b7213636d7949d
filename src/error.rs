//! Error types for brdocs

use thiserror::Error;

use crate::document::DocumentKind;

/// Main error type for identifier parsing and dataset operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Normalized value has the wrong number of digits
    #[error("Invalid {kind} length: expected {expected} digits, got {actual}")]
    InvalidLength {
        kind: DocumentKind,
        expected: usize,
        actual: usize,
    },

    /// Value contains something other than ASCII digits
    #[error("Invalid character in {kind}")]
    InvalidCharacter { kind: DocumentKind },

    /// Every digit is the same (e.g. 111.111.111-11)
    #[error("Repeated digits are not a valid {0}")]
    RepeatedDigits(DocumentKind),

    /// Base digits are all zero
    #[error("Zero base is not a valid {0}")]
    ZeroBase(DocumentKind),

    /// Check digits do not match the base digits
    #[error("Check digit mismatch for {0}")]
    ChecksumMismatch(DocumentKind),

    /// No CEP range is registered for the state code
    #[error("Unknown state: {0}")]
    UnknownState(String),

    /// CEP range dataset could not be loaded
    #[error("Dataset error: {0}")]
    DatasetError(String),
}

impl From<csv::Error> for DocumentError {
    fn from(err: csv::Error) -> Self {
        DocumentError::DatasetError(err.to_string())
    }
}

/// Result type alias for brdocs operations
pub type Result<T> = std::result::Result<T, DocumentError>;
