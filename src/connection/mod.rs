//! Connection abstraction over a relational backend
//!
//! The engine receives a live connection handle and performs exactly one
//! logical operation per invocation: prepare-and-execute a query returning
//! a row cursor with column metadata, or introspect the schema for tables
//! and columns. Concrete backends live in the `datasource` module.
//!
//! Resource discipline is RAII: dropping a prepared query or cursor
//! releases the underlying statement on every exit path.

mod errors;
mod metadata;

pub use errors::{ConnectionError, ConnectionResult};
pub use metadata::{ColumnInfo, TableInfo};

/// A value as bound onto a positional placeholder.
///
/// This is the vendor-neutral storage-class model; wire types from the
/// `params` module coerce their string literals into one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Text(String),
}

impl SqlValue {
    /// Whether this is the SQL null value
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

/// Metadata for one result column, available once per cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMeta {
    /// Column label as reported by the backend (query aliases included)
    pub label: String,
    /// 1-based ordinal position
    pub ordinal: usize,
    /// Declared SQL type, when the backend knows it
    pub decl_type: Option<String>,
}

/// One result row: string-rendered column values in ordinal order
pub type Row = Vec<Option<String>>;

/// Forward-only iterator over query result rows
pub trait RowCursor {
    /// Column metadata in ordinal order
    fn columns(&self) -> &[ColumnMeta];

    /// Advance to the next row, or `None` when the cursor is exhausted
    fn advance(&mut self) -> ConnectionResult<Option<Row>>;
}

/// A prepared query with bindable positional placeholders
pub trait PreparedQuery: std::fmt::Debug {
    /// Bind a value onto the placeholder at `index` (1-based)
    fn bind(&mut self, index: usize, value: &SqlValue) -> ConnectionResult<()>;

    /// Execute and return the result cursor
    fn cursor(&mut self) -> ConnectionResult<Box<dyn RowCursor + '_>>;
}

/// An open connection to a relational backend
pub trait Connection {
    /// Prepare a query for execution
    fn prepare<'c>(&'c mut self, sql: &str) -> ConnectionResult<Box<dyn PreparedQuery + 'c>>;

    /// Tables whose names match the given SQL LIKE pattern
    fn tables(&mut self, name_pattern: &str) -> ConnectionResult<Vec<TableInfo>>;

    /// Columns of the tables whose names match the given SQL LIKE pattern
    fn columns(&mut self, name_pattern: &str) -> ConnectionResult<Vec<ColumnInfo>>;
}
