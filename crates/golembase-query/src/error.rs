//! Error types for query construction.

use thiserror::Error;

/// Errors that can occur while building a query expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A value cannot be rendered into the query grammar.
    #[error("invalid value: {reason}")]
    InvalidValue {
        /// Why the value was rejected.
        reason: String,
    },

    /// An n-ary operation was called without any operands.
    #[error("{operation} requires at least one argument")]
    EmptyArgumentList {
        /// Name of the operation that was called.
        operation: &'static str,
    },
}

impl QueryError {
    pub(crate) fn negative_integer(value: i64) -> Self {
        Self::InvalidValue {
            reason: format!("only non-negative integers are permitted (got {value})"),
        }
    }

    pub(crate) fn embedded_quote() -> Self {
        Self::InvalidValue {
            reason: "string values must not contain '\"'".to_string(),
        }
    }
}

/// Result type for query construction.
pub type QueryResult<T> = std::result::Result<T, QueryError>;
