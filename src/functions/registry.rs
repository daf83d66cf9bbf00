//! Named function registry
//!
//! An immutable map from function names to factories. A factory receives
//! the flat argument list: the first argument is the query file path or
//! table name, the remaining arguments are parameter value/type pairs.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::params::{parse_parameters, ParameterError, QueryParameter};

use super::errors::{FunctionError, FunctionResult};
use super::kind::ConnectionFunction;

type FunctionFactory = fn(&[String]) -> FunctionResult<ConnectionFunction>;

/// Registry of constructible function kinds
pub struct FunctionRegistry {
    factories: HashMap<&'static str, FunctionFactory>,
}

impl FunctionRegistry {
    /// Registry with all built-in function kinds
    pub fn with_builtin_functions() -> Self {
        let mut factories: HashMap<&'static str, FunctionFactory> = HashMap::new();

        factories.insert("query_results", |args| {
            let (file, parameters) = file_and_parameters(args)?;
            Ok(ConnectionFunction::QueryResults {
                query_file: file,
                parameters,
            })
        });
        factories.insert("json_query_results", |args| {
            let (file, parameters) = file_and_parameters(args)?;
            Ok(ConnectionFunction::JsonQueryResults {
                query_file: file,
                parameters,
            })
        });
        factories.insert("query_results_as_xml", |args| {
            let (file, parameters) = file_and_parameters(args)?;
            Ok(ConnectionFunction::QueryResultsAsXml {
                query_file: file,
                parameters,
            })
        });
        factories.insert("xml_query_results_as_xml", |args| {
            let (file, parameters) = file_and_parameters(args)?;
            Ok(ConnectionFunction::XmlQueryResultsAsXml {
                query_file: file,
                parameters,
            })
        });
        factories.insert("select_all_from_table", |args| {
            ConnectionFunction::select_all_from_table(first_argument(args)?)
        });
        factories.insert("select_all_from_table_as_xml", |args| {
            ConnectionFunction::select_all_from_table_as_xml(first_argument(args)?)
        });
        factories.insert("select_row_count_from_table", |args| {
            ConnectionFunction::select_row_count_from_table(first_argument(args)?)
        });
        factories.insert("table_metadata", |args| {
            Ok(ConnectionFunction::TableMetadata {
                name_pattern: first_argument(args)?.to_string(),
            })
        });
        factories.insert("table_columns_metadata", |args| {
            Ok(ConnectionFunction::TableColumnsMetadata {
                name_pattern: first_argument(args)?.to_string(),
            })
        });

        Self { factories }
    }

    /// Construct the named function from a flat argument list
    pub fn create(&self, name: &str, args: &[String]) -> FunctionResult<ConnectionFunction> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| FunctionError::UnknownFunction(name.to_string()))?;
        factory(args)
    }

    /// Registered function names, sorted
    pub fn function_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::with_builtin_functions()
    }
}

fn first_argument(args: &[String]) -> FunctionResult<&str> {
    args.first()
        .map(|s| s.as_str())
        .ok_or_else(|| FunctionError::Parameter(ParameterError::MissingArgument(0)))
}

fn file_and_parameters(args: &[String]) -> FunctionResult<(PathBuf, Vec<QueryParameter>)> {
    let file = PathBuf::from(first_argument(args)?);
    let parameters = parse_parameters(&args[1..])?;
    Ok((file, parameters))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unknown_function_name() {
        let registry = FunctionRegistry::with_builtin_functions();
        let err = registry.create("no_such_function", &[]).unwrap_err();
        assert!(matches!(err, FunctionError::UnknownFunction(_)));
    }

    #[test]
    fn test_all_builtin_names_registered() {
        let registry = FunctionRegistry::with_builtin_functions();
        assert_eq!(
            registry.function_names(),
            vec![
                "json_query_results",
                "query_results",
                "query_results_as_xml",
                "select_all_from_table",
                "select_all_from_table_as_xml",
                "select_row_count_from_table",
                "table_columns_metadata",
                "table_metadata",
                "xml_query_results_as_xml",
            ]
        );
    }

    #[test]
    fn test_file_backed_factory_parses_parameter_pairs() {
        let registry = FunctionRegistry::with_builtin_functions();
        let function = registry
            .create(
                "query_results",
                &strings(&["q.sql", "bob", "VARCHAR", "7", "INTEGER"]),
            )
            .unwrap();

        match function {
            ConnectionFunction::QueryResults {
                query_file,
                parameters,
            } => {
                assert_eq!(query_file, PathBuf::from("q.sql"));
                assert_eq!(parameters.len(), 2);
            }
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    #[test]
    fn test_factory_requires_first_argument() {
        let registry = FunctionRegistry::with_builtin_functions();
        let err = registry.create("select_all_from_table", &[]).unwrap_err();
        assert!(matches!(
            err,
            FunctionError::Parameter(ParameterError::MissingArgument(0))
        ));
    }

    #[test]
    fn test_factory_rejects_odd_parameter_list() {
        let registry = FunctionRegistry::with_builtin_functions();
        let err = registry
            .create("query_results", &strings(&["q.sql", "bob"]))
            .unwrap_err();
        assert!(matches!(
            err,
            FunctionError::Parameter(ParameterError::OddArgumentCount(1))
        ));
    }

    #[test]
    fn test_table_factory_applies_identifier_guard() {
        let registry = FunctionRegistry::with_builtin_functions();
        let err = registry
            .create("select_all_from_table", &strings(&["orders; drop table x"]))
            .unwrap_err();
        assert!(matches!(err, FunctionError::UnsafeIdentifier(_)));
    }
}
