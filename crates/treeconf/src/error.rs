//! Error types for treeconf
//!
//! Resolution failures are split into two benign not-found kinds (a mapping
//! key that doesn't exist, a sequence index out of range) and a structural
//! type-mismatch. The not-found kinds are collapsed to an absent value by
//! the read path; `NotIndexable` is never collapsed and surfaces from writes
//! that try to assign through a scalar.

use thiserror::Error;

/// Result type alias for treeconf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for treeconf operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A mapping lookup for a path segment that doesn't exist
    #[error("key '{key}' not found (path: {path})")]
    KeyNotFound { path: String, key: String },

    /// A sequence lookup for an integer segment out of range
    #[error("index {index} out of range (path: {path})")]
    IndexOutOfRange { path: String, index: usize },

    /// Attempted to index through a non-container value
    #[error("cannot index {found} with '{segment}' (path: {path})")]
    NotIndexable {
        path: String,
        segment: String,
        found: &'static str,
    },

    /// Error parsing or serializing YAML/JSON
    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Create a key not found error
    pub fn key_not_found(path: impl ToString, key: impl Into<String>) -> Self {
        Error::KeyNotFound {
            path: path.to_string(),
            key: key.into(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(path: impl ToString, index: usize) -> Self {
        Error::IndexOutOfRange {
            path: path.to_string(),
            index,
        }
    }

    /// Create a not indexable error
    pub fn not_indexable(path: impl ToString, segment: impl Into<String>, found: &'static str) -> Self {
        Error::NotIndexable {
            path: path.to_string(),
            segment: segment.into(),
            found,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Error::Parse(message.into())
    }

    /// Whether this error is one of the benign not-found kinds.
    ///
    /// Reads convert these into an absent value instead of propagating.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::KeyNotFound { .. } | Error::IndexOutOfRange { .. }
        )
    }
}
