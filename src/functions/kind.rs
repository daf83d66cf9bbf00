//! Function kinds
//!
//! A tagged variant per concrete query shape; each variant carries only
//! the configuration it needs. Instances are single-shot: one `build`
//! call executes one query against the supplied connection.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};
use tracing::debug;

use crate::connection::Connection;
use crate::document::Document;
use crate::mapper::{expand, json as json_mapper, xml as xml_mapper};
use crate::params::{bind_parameters, QueryParameter};

use super::errors::{FunctionError, FunctionResult};

/// A result-producing function over an open connection
#[derive(Debug, Clone)]
pub enum ConnectionFunction {
    /// File-backed query, result as JSON
    QueryResults {
        query_file: PathBuf,
        parameters: Vec<QueryParameter>,
    },
    /// File-backed single-column query returning serialized JSON objects,
    /// result as JSON with each cell expanded
    JsonQueryResults {
        query_file: PathBuf,
        parameters: Vec<QueryParameter>,
    },
    /// File-backed query, result as XML
    QueryResultsAsXml {
        query_file: PathBuf,
        parameters: Vec<QueryParameter>,
    },
    /// File-backed single-column query returning serialized XML,
    /// result as XML with each cell expanded
    XmlQueryResultsAsXml {
        query_file: PathBuf,
        parameters: Vec<QueryParameter>,
    },
    /// `select * from <table>`, result as JSON
    SelectAllFromTable { table: String },
    /// `select * from <table>`, result as XML
    SelectAllFromTableAsXml { table: String },
    /// `select count(*) from <table>`, result as `{"rowCount": N}`
    SelectRowCountFromTable { table: String },
    /// Table metadata for a table name pattern, result as JSON
    TableMetadata { name_pattern: String },
    /// Column metadata for a table name pattern, result as JSON
    TableColumnsMetadata { name_pattern: String },
}

impl ConnectionFunction {
    /// Table-backed select-all kind (JSON), with the identifier guard applied
    pub fn select_all_from_table(table: &str) -> FunctionResult<Self> {
        Ok(Self::SelectAllFromTable {
            table: checked_table_name(table)?,
        })
    }

    /// Table-backed select-all kind (XML), with the identifier guard applied
    pub fn select_all_from_table_as_xml(table: &str) -> FunctionResult<Self> {
        Ok(Self::SelectAllFromTableAsXml {
            table: checked_table_name(table)?,
        })
    }

    /// Table-backed row-count kind, with the identifier guard applied
    pub fn select_row_count_from_table(table: &str) -> FunctionResult<Self> {
        Ok(Self::SelectRowCountFromTable {
            table: checked_table_name(table)?,
        })
    }

    /// Execute against the connection and materialize the result document.
    ///
    /// Read-only by convention; nothing at this layer enforces it.
    pub fn build(&self, connection: &mut dyn Connection) -> FunctionResult<Document> {
        match self {
            Self::QueryResults {
                query_file,
                parameters,
            } => {
                let sql = read_query_file(query_file)?;
                run_json_query(connection, &sql, parameters).map(Document::Json)
            }

            Self::JsonQueryResults {
                query_file,
                parameters,
            } => {
                let sql = read_query_file(query_file)?;
                let raw = run_json_query(connection, &sql, parameters)?;
                Ok(Document::Json(expand::expand_json(raw)?))
            }

            Self::QueryResultsAsXml {
                query_file,
                parameters,
            } => {
                let sql = read_query_file(query_file)?;
                run_xml_query(connection, &sql, parameters).map(Document::Xml)
            }

            Self::XmlQueryResultsAsXml {
                query_file,
                parameters,
            } => {
                let sql = read_query_file(query_file)?;
                let raw = run_xml_query(connection, &sql, parameters)?;
                Ok(Document::Xml(expand::expand_xml(raw)?))
            }

            Self::SelectAllFromTable { table } => {
                let sql = format!("select * from {}", table);
                run_json_query(connection, &sql, &[]).map(Document::Json)
            }

            Self::SelectAllFromTableAsXml { table } => {
                let sql = format!("select * from {}", table);
                run_xml_query(connection, &sql, &[]).map(Document::Xml)
            }

            Self::SelectRowCountFromTable { table } => row_count(connection, table),

            Self::TableMetadata { name_pattern } => {
                let tables = connection.tables(name_pattern)?;
                let entries: Vec<Value> = tables.iter().map(|t| t.to_json()).collect();
                let mut document = Map::new();
                document.insert("tables".to_string(), Value::Array(entries));
                Ok(Document::Json(Value::Object(document)))
            }

            Self::TableColumnsMetadata { name_pattern } => {
                let columns = connection.columns(name_pattern)?;
                let entries: Vec<Value> = columns.iter().map(|c| c.to_json()).collect();
                let mut document = Map::new();
                document.insert("table".to_string(), json!(name_pattern));
                document.insert("columns".to_string(), Value::Array(entries));
                Ok(Document::Json(Value::Object(document)))
            }
        }
    }
}

/// Query text is read at invocation time, never cached across invocations
fn read_query_file(path: &Path) -> FunctionResult<String> {
    let content = fs::read_to_string(path).map_err(|e| FunctionError::QueryFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(content.trim().to_string())
}

/// Reject identifiers containing whitespace before interpolating them.
///
/// This is a deliberately narrow SQL-injection mitigation: it blocks the
/// simplest injection vector and nothing more. Callers needing real safety
/// must use the file-backed, parameterized query kinds instead.
fn checked_table_name(table: &str) -> FunctionResult<String> {
    if table.chars().any(char::is_whitespace) {
        return Err(FunctionError::UnsafeIdentifier(table.to_string()));
    }
    Ok(table.to_string())
}

fn run_json_query(
    connection: &mut dyn Connection,
    sql: &str,
    parameters: &[QueryParameter],
) -> FunctionResult<Value> {
    debug!(sql, parameter_count = parameters.len(), "executing query");
    let mut query = connection.prepare(sql)?;
    bind_parameters(query.as_mut(), parameters)?;
    let mut cursor = query.cursor()?;
    Ok(json_mapper::materialize_rows(cursor.as_mut())?)
}

fn run_xml_query(
    connection: &mut dyn Connection,
    sql: &str,
    parameters: &[QueryParameter],
) -> FunctionResult<crate::document::Element> {
    debug!(sql, parameter_count = parameters.len(), "executing query");
    let mut query = connection.prepare(sql)?;
    bind_parameters(query.as_mut(), parameters)?;
    let mut cursor = query.cursor()?;
    Ok(xml_mapper::materialize_rows(cursor.as_mut())?)
}

fn row_count(connection: &mut dyn Connection, table: &str) -> FunctionResult<Document> {
    let sql = format!("select count(*) from {}", table);
    debug!(sql, "executing row count query");
    let mut query = connection.prepare(&sql)?;
    let mut cursor = query.cursor()?;

    let row = cursor.advance()?.ok_or(FunctionError::MissingResultRow)?;
    let cell = row
        .into_iter()
        .next()
        .flatten()
        .ok_or(FunctionError::MissingResultRow)?;
    let count: i64 = cell
        .parse()
        .map_err(|_| FunctionError::InvalidRowCount(cell.clone()))?;

    Ok(Document::Json(json!({ "rowCount": count })))
}
