//! Error types for nestkv.
//!
//! Expected conditions are not errors: a missing key is `None`, and a
//! rollback or commit with nothing open reports `NoTransaction` as an
//! outcome. What remains here is input that cannot be represented and
//! broken invariants.

use thiserror::Error;

/// All nestkv errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Key is empty or otherwise unusable
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Value is not a representable integer
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Internal error (bug or invariant violation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for nestkv operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error was caused by caller input.
    ///
    /// Input errors are raised before any state is touched.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidKey(_) | Error::InvalidValue(_))
    }

    /// Check if this is a serious/unrecoverable error.
    pub fn is_serious(&self) -> bool {
        matches!(self, Error::Internal(_))
    }
}
