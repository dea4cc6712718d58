//! Error types for query execution.

use thiserror::Error;

/// Failure reported by an [`EntityStore`](crate::EntityStore).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    /// Creates a store error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error message reported by the store.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors that can occur while running a query.
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// The query could not be constructed.
    #[error("query construction error: {0}")]
    Query(#[from] golembase_query::QueryError),

    /// The query text is empty.
    #[error("empty query")]
    EmptyQuery,

    /// Result set exceeds configured limit.
    #[error("Result set too large: {count} exceeds limit {limit}")]
    ResultTooLarge {
        /// Number of records returned.
        count: usize,
        /// Configured limit.
        limit: usize,
    },

    /// Error from the underlying entity store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for executor operations.
pub type ExecutorResult<T> = std::result::Result<T, ExecutorError>;
