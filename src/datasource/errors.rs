//! Datasource configuration and provisioning errors

use thiserror::Error;

/// Result type for datasource operations
pub type DataSourceResult<T> = Result<T, DataSourceError>;

/// Datasource errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DataSourceError {
    #[error("Failed to load datasource config: {0}")]
    Config(String),

    #[error("No datasource named '{0}' is configured")]
    UnknownDataSource(String),

    #[error("Datasource '{name}' uses unsupported backend '{backend}'")]
    UnknownBackend { name: String, backend: String },

    #[error("Failed to open datasource: {0}")]
    Open(String),
}
