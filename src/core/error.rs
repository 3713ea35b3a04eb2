//! Custom error types for the application.
//!
//! None of these reach the user. Every public workbench operation is total;
//! callers log the error and fall back to a degraded but valid state.
//!
//! - [`StorageError`] - localStorage access for the persisted theme
//! - [`ManifestError`] - the embedded documents manifest
//! - [`DomError`] - missing browser objects or mount points

use thiserror::Error;

/// localStorage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available (private mode, sandboxed iframe, ...)
    #[error("localStorage not available")]
    Unavailable,
    /// Failed to read an entry.
    #[error("failed to read '{0}' from localStorage")]
    ReadFailed(String),
    /// Failed to write an entry.
    #[error("failed to write '{0}' to localStorage")]
    WriteFailed(String),
}

/// Documents manifest errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    #[error("documents manifest parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ManifestError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Browser environment errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("browser window not available")]
    NoWindow,
    #[error("document not available")]
    NoDocument,
    #[error("element not found: {0}")]
    MissingElement(String),
}
