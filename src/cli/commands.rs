//! CLI command implementations
//!
//! Every command follows the same shape: build a function kind from the
//! arguments, load the datasource configuration, open a connection, run
//! the function, and print the resulting document. One invocation is one
//! connection and one query.

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::datasource::DataSourcesConfig;
use crate::functions::{ConnectionFunction, FunctionError, FunctionRegistry};
use crate::params::parse_parameters;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    run_command(Cli::parse_args())
}

/// Run the appropriate command based on CLI args
pub fn run_command(cli: Cli) -> CliResult<()> {
    let function = build_function(&cli.command)?;

    let config = DataSourcesConfig::load(&cli.config)?;
    let mut connection = config.open(&cli.datasource)?;

    debug!(datasource = %cli.datasource, "running function");
    let document = function.build(&mut connection)?;

    println!("{}", document.to_pretty_string()?);
    Ok(())
}

fn build_function(command: &Command) -> CliResult<ConnectionFunction> {
    match command {
        Command::Run { function, args } => {
            let registry = FunctionRegistry::with_builtin_functions();
            registry.create(function, args).map_err(|e| match e {
                FunctionError::UnknownFunction(name) => super::errors::CliError::UnknownFunction {
                    name,
                    available: registry.function_names().join(", "),
                },
                other => other.into(),
            })
        }

        Command::Query { file, params } => Ok(ConnectionFunction::QueryResults {
            query_file: file.clone(),
            parameters: parse_parameters(params)?,
        }),

        Command::QueryXml { file, params } => Ok(ConnectionFunction::QueryResultsAsXml {
            query_file: file.clone(),
            parameters: parse_parameters(params)?,
        }),

        Command::JsonQuery { file, params } => Ok(ConnectionFunction::JsonQueryResults {
            query_file: file.clone(),
            parameters: parse_parameters(params)?,
        }),

        Command::XmlQuery { file, params } => Ok(ConnectionFunction::XmlQueryResultsAsXml {
            query_file: file.clone(),
            parameters: parse_parameters(params)?,
        }),

        Command::Table { name, xml } => {
            if *xml {
                Ok(ConnectionFunction::select_all_from_table_as_xml(name)?)
            } else {
                Ok(ConnectionFunction::select_all_from_table(name)?)
            }
        }

        Command::Count { name } => Ok(ConnectionFunction::select_row_count_from_table(name)?),

        Command::Tables { pattern } => Ok(ConnectionFunction::TableMetadata {
            name_pattern: pattern.clone(),
        }),

        Command::Columns { pattern } => Ok(ConnectionFunction::TableColumnsMetadata {
            name_pattern: pattern.clone(),
        }),
    }
}
