//! CLI-specific error types

use thiserror::Error;

use crate::datasource::DataSourceError;
use crate::document::XmlError;
use crate::functions::FunctionError;
use crate::params::ParameterError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown function '{name}'. Available functions: {available}")]
    UnknownFunction { name: String, available: String },

    #[error(transparent)]
    Function(#[from] FunctionError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    #[error(transparent)]
    Serialize(#[from] XmlError),
}
