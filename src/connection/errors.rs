//! Connection layer errors
//!
//! Any failure of the underlying backend while preparing, binding,
//! executing, or iterating a query surfaces as a `ConnectionError`.
//! Errors are terminal to the current invocation; nothing is retried.

use thiserror::Error;

/// Result type for connection operations
pub type ConnectionResult<T> = Result<T, ConnectionError>;

/// Connection operation errors
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("Failed to prepare query: {0}")]
    Prepare(String),

    #[error("Failed to bind parameter {index}: {reason}")]
    Bind { index: usize, reason: String },

    #[error("Query execution failed: {0}")]
    Execute(String),

    #[error("Failed to read result row: {0}")]
    Read(String),

    #[error("Schema introspection failed: {0}")]
    Metadata(String),
}
