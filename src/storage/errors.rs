//! Storage error types
//!
//! Storage errors carry engine detail for the logs. The HTTP layer never
//! forwards that detail to clients.

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Could not open a connection
    #[error("connection failed: {0}")]
    Connect(String),

    /// A statement failed on an open connection
    #[error("query failed: {0}")]
    Query(String),

    /// The blocking task running the statement did not complete
    #[error("storage task failed: {0}")]
    TaskFailed(String),
}

impl StorageError {
    pub fn connect(err: impl std::fmt::Display) -> Self {
        Self::Connect(err.to_string())
    }

    pub fn query(err: impl std::fmt::Display) -> Self {
        Self::Query(err.to_string())
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        Self::query(err)
    }
}
