//! Function construction and execution errors
//!
//! Aggregates the lower-layer error types. All errors are terminal to the
//! current invocation; the engine never degrades to partial output.

use thiserror::Error;

use crate::connection::ConnectionError;
use crate::mapper::ShapeError;
use crate::params::ParameterError;

/// Result type for function operations
pub type FunctionResult<T> = Result<T, FunctionError>;

/// Function errors
#[derive(Debug, Error)]
pub enum FunctionError {
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Table name with whitespace not allowed (to prevent SQL injection): '{0}'")]
    UnsafeIdentifier(String),

    #[error("Failed to read query file '{path}': {reason}")]
    QueryFile { path: String, reason: String },

    #[error("Missing result row")]
    MissingResultRow,

    #[error("Result is not a row count: '{0}'")]
    InvalidRowCount(String),

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}
