//! Parameter parsing errors
//!
//! All of these reject the invocation before any database work happens.

use thiserror::Error;

/// Result type for parameter operations
pub type ParameterResult<T> = Result<T, ParameterError>;

/// Parameter list and wire-type errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParameterError {
    #[error("Expected even number of arguments (pairs of parameter value and wire type), got {0}")]
    OddArgumentCount(usize),

    #[error("Missing required argument at position {0}")]
    MissingArgument(usize),

    #[error("Unknown wire type: {0}")]
    UnknownType(String),

    #[error("Invalid {wire_type} literal: '{literal}'")]
    InvalidLiteral { wire_type: String, literal: String },
}
