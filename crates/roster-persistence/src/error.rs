//! Error types for record store operations.

use std::path::PathBuf;

use roster_models::{Field, FieldViolation};
use thiserror::Error;

/// Errors that can occur during record store operations.
///
/// A line that does not parse is not an error; scans report it as
/// [`ParseResult::Malformed`](crate::ParseResult::Malformed).
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing file.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to the backing file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read from the backing file.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record field holds a character the line format cannot carry.
    #[error("invalid {field} field: contains {found:?}")]
    InvalidField { field: Field, found: char },
}

impl StoreError {
    /// Returns true for failures of the underlying file system.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            StoreError::Open { .. } | StoreError::Write { .. } | StoreError::Read { .. }
        )
    }
}

impl From<FieldViolation> for StoreError {
    fn from(violation: FieldViolation) -> Self {
        StoreError::InvalidField {
            field: violation.field,
            found: violation.found,
        }
    }
}

/// Result type alias for record store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
