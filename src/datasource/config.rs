//! Datasource configuration
//!
//! A JSON file mapping datasource names to backend definitions:
//!
//! ```json
//! {
//!   "datasources": {
//!     "main": { "backend": "sqlite", "path": "./app.db" }
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::{DataSourceError, DataSourceResult};
use super::sqlite::SqliteConnection;

const SQLITE_BACKEND: &str = "sqlite";

/// One named datasource definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSourceConfig {
    /// Backend kind; only "sqlite" is supported
    pub backend: String,

    /// Database file path, or ":memory:" for an in-memory database
    pub path: String,
}

/// The full datasource configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSourcesConfig {
    /// Datasource definitions keyed by name
    #[serde(default)]
    pub datasources: HashMap<String, DataSourceConfig>,
}

impl DataSourcesConfig {
    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> DataSourceResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| DataSourceError::Config(format!("Failed to read config: {}", e)))?;

        let config: DataSourcesConfig = serde_json::from_str(&content)
            .map_err(|e| DataSourceError::Config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> DataSourceResult<()> {
        for (name, datasource) in &self.datasources {
            if datasource.backend != SQLITE_BACKEND {
                return Err(DataSourceError::UnknownBackend {
                    name: name.clone(),
                    backend: datasource.backend.clone(),
                });
            }
            if datasource.path.is_empty() {
                return Err(DataSourceError::Config(format!(
                    "Datasource '{}' has an empty path",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Open a connection to the named datasource
    pub fn open(&self, name: &str) -> DataSourceResult<SqliteConnection> {
        let datasource = self
            .datasources
            .get(name)
            .ok_or_else(|| DataSourceError::UnknownDataSource(name.to_string()))?;

        debug!(datasource = name, path = %datasource.path, "opening datasource");
        SqliteConnection::open(&datasource.path)
    }
}
