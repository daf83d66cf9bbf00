//! Datasource provisioning
//!
//! Maps datasource names to backend definitions via a JSON configuration
//! file and opens concrete connections. The engine itself only sees the
//! `connection` traits; this module is the one place that knows about
//! specific backends.

mod config;
mod errors;
mod sqlite;

pub use config::{DataSourceConfig, DataSourcesConfig};
pub use errors::{DataSourceError, DataSourceResult};
pub use sqlite::SqliteConnection;
