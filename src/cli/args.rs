//! CLI argument definitions using clap
//!
//! Query parameters are passed as trailing value/type pairs, e.g.:
//!
//! ```text
//! sqldoc query orders.sql bob VARCHAR 42 INTEGER
//! sqldoc table orders --xml
//! sqldoc run select_row_count_from_table orders
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sqldoc - parameterized SQL queries materialized as JSON or XML documents
#[derive(Parser, Debug)]
#[command(name = "sqldoc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the datasource configuration file
    #[arg(long, default_value = "./sqldoc.json")]
    pub config: PathBuf,

    /// Name of the configured datasource to use
    #[arg(long, default_value = "main")]
    pub datasource: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Construct and run a named function from the registry
    Run {
        /// Function name
        function: String,
        /// Flat argument list handed to the function factory
        args: Vec<String>,
    },

    /// Execute a query file, result as JSON
    Query {
        /// Path to the SQL query file
        file: PathBuf,
        /// Parameter value/type pairs
        params: Vec<String>,
    },

    /// Execute a query file, result as XML
    QueryXml {
        /// Path to the SQL query file
        file: PathBuf,
        /// Parameter value/type pairs
        params: Vec<String>,
    },

    /// Execute a single-column query returning JSON objects, expanded in place
    JsonQuery {
        /// Path to the SQL query file
        file: PathBuf,
        /// Parameter value/type pairs
        params: Vec<String>,
    },

    /// Execute a single-column query returning XML, expanded in place
    XmlQuery {
        /// Path to the SQL query file
        file: PathBuf,
        /// Parameter value/type pairs
        params: Vec<String>,
    },

    /// Select all rows from a table
    Table {
        /// Table name (no whitespace allowed)
        name: String,
        /// Produce XML instead of JSON
        #[arg(long)]
        xml: bool,
    },

    /// Count the rows of a table
    Count {
        /// Table name (no whitespace allowed)
        name: String,
    },

    /// List tables matching a name pattern
    Tables {
        /// SQL LIKE pattern for table names
        pattern: String,
    },

    /// List columns of tables matching a name pattern
    Columns {
        /// SQL LIKE pattern for table names
        pattern: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
