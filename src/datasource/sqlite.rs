//! SQLite backend
//!
//! Adapts rusqlite to the engine's connection traits. Statement and
//! cursor resources are released by drop, so every exit path closes them.
//!
//! JDBC-style metadata fields SQLite cannot supply (catalogs, schemas,
//! remarks) are reported as `None` and surface as explicit nulls in the
//! materialized metadata documents.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rusqlite::types::ValueRef;

use crate::connection::{
    ColumnInfo, ColumnMeta, Connection, ConnectionError, ConnectionResult, PreparedQuery, Row,
    RowCursor, SqlValue, TableInfo,
};

use super::errors::{DataSourceError, DataSourceResult};

/// An open SQLite connection
#[derive(Debug)]
pub struct SqliteConnection {
    conn: rusqlite::Connection,
}

impl SqliteConnection {
    /// Open a database file, or an in-memory database for ":memory:"
    pub fn open(path: &str) -> DataSourceResult<Self> {
        let conn = if path == ":memory:" {
            rusqlite::Connection::open_in_memory()
        } else {
            rusqlite::Connection::open(path)
        }
        .map_err(|e| DataSourceError::Open(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Open a fresh in-memory database
    pub fn open_in_memory() -> DataSourceResult<Self> {
        Self::open(":memory:")
    }

    /// Execute a statement that returns no rows (DDL, inserts)
    pub fn execute_batch(&self, sql: &str) -> ConnectionResult<()> {
        self.conn
            .execute_batch(sql)
            .map_err(|e| ConnectionError::Execute(e.to_string()))
    }
}

impl Connection for SqliteConnection {
    fn prepare<'c>(&'c mut self, sql: &str) -> ConnectionResult<Box<dyn PreparedQuery + 'c>> {
        let stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| ConnectionError::Prepare(e.to_string()))?;
        Ok(Box::new(SqliteQuery { stmt }))
    }

    fn tables(&mut self, name_pattern: &str) -> ConnectionResult<Vec<TableInfo>> {
        let mut stmt = self
            .conn
            .prepare(
                "select name, type from sqlite_master \
                 where type in ('table', 'view') and name like ?1 order by name",
            )
            .map_err(|e| ConnectionError::Metadata(e.to_string()))?;

        let rows = stmt
            .query_map([name_pattern], |row| {
                let name: String = row.get(0)?;
                let kind: String = row.get(1)?;
                Ok((name, kind))
            })
            .map_err(|e| ConnectionError::Metadata(e.to_string()))?;

        let mut tables = Vec::new();
        for row in rows {
            let (name, kind) = row.map_err(|e| ConnectionError::Metadata(e.to_string()))?;
            tables.push(TableInfo {
                table_cat: None,
                table_schema: None,
                table_name: name,
                table_type: if kind == "view" { "VIEW" } else { "TABLE" }.to_string(),
                remarks: None,
                type_cat: None,
                type_schema: None,
                type_name: None,
                self_referencing_col_name: None,
                ref_generation: None,
            });
        }
        Ok(tables)
    }

    fn columns(&mut self, name_pattern: &str) -> ConnectionResult<Vec<ColumnInfo>> {
        let table_names: Vec<String> = {
            let mut stmt = self
                .conn
                .prepare(
                    "select name from sqlite_master \
                     where type in ('table', 'view') and name like ?1 order by name",
                )
                .map_err(|e| ConnectionError::Metadata(e.to_string()))?;

            let rows = stmt
                .query_map([name_pattern], |row| row.get::<_, String>(0))
                .map_err(|e| ConnectionError::Metadata(e.to_string()))?;

            rows.collect::<Result<_, _>>()
                .map_err(|e| ConnectionError::Metadata(e.to_string()))?
        };

        let mut columns = Vec::new();
        for table_name in table_names {
            let mut stmt = self
                .conn
                .prepare(
                    "select cid, name, type, \"notnull\", dflt_value \
                     from pragma_table_info(?1) order by cid",
                )
                .map_err(|e| ConnectionError::Metadata(e.to_string()))?;

            let rows = stmt
                .query_map([table_name.as_str()], |row| {
                    let cid: i64 = row.get(0)?;
                    let name: String = row.get(1)?;
                    let decl_type: String = row.get(2)?;
                    let not_null: i64 = row.get(3)?;
                    let default: Option<String> = row.get(4)?;
                    Ok((cid, name, decl_type, not_null, default))
                })
                .map_err(|e| ConnectionError::Metadata(e.to_string()))?;

            for row in rows {
                let (cid, column_name, decl_type, not_null, default) =
                    row.map_err(|e| ConnectionError::Metadata(e.to_string()))?;

                let nullable = if not_null == 0 { 1 } else { 0 };
                columns.push(ColumnInfo {
                    table_cat: None,
                    table_schema: None,
                    table_name: table_name.clone(),
                    column_name,
                    data_type: jdbc_type_code(&decl_type),
                    type_name: if decl_type.is_empty() {
                        "BLOB".to_string()
                    } else {
                        decl_type.to_ascii_uppercase()
                    },
                    column_size: 0,
                    decimal_digits: None,
                    num_prec_radix: Some(10),
                    nullable: Some(nullable),
                    remarks: None,
                    column_def: default,
                    char_octet_length: None,
                    ordinal_position: Some(cid as i32 + 1),
                    is_nullable: if nullable == 1 { "YES" } else { "NO" }.to_string(),
                    is_auto_increment: "NO".to_string(),
                    is_generated_column: "NO".to_string(),
                });
            }
        }
        Ok(columns)
    }
}

/// JDBC type code derived from SQLite's type-affinity rules
fn jdbc_type_code(decl_type: &str) -> i32 {
    let decl = decl_type.to_ascii_uppercase();
    if decl.contains("INT") {
        4 // INTEGER
    } else if decl.contains("CHAR") || decl.contains("CLOB") || decl.contains("TEXT") {
        12 // VARCHAR
    } else if decl.is_empty() || decl.contains("BLOB") {
        2004 // BLOB
    } else if decl.contains("REAL") || decl.contains("FLOA") || decl.contains("DOUB") {
        8 // DOUBLE
    } else {
        2 // NUMERIC
    }
}

#[derive(Debug)]
struct SqliteQuery<'c> {
    stmt: rusqlite::Statement<'c>,
}

impl PreparedQuery for SqliteQuery<'_> {
    fn bind(&mut self, index: usize, value: &SqlValue) -> ConnectionResult<()> {
        let bind_error = |e: rusqlite::Error| ConnectionError::Bind {
            index,
            reason: e.to_string(),
        };
        match value {
            SqlValue::Null => self
                .stmt
                .raw_bind_parameter(index, rusqlite::types::Null)
                .map_err(bind_error),
            SqlValue::Integer(i) => self.stmt.raw_bind_parameter(index, i).map_err(bind_error),
            SqlValue::Real(f) => self.stmt.raw_bind_parameter(index, f).map_err(bind_error),
            SqlValue::Boolean(b) => self.stmt.raw_bind_parameter(index, b).map_err(bind_error),
            SqlValue::Text(s) => self
                .stmt
                .raw_bind_parameter(index, s.as_str())
                .map_err(bind_error),
        }
    }

    fn cursor(&mut self) -> ConnectionResult<Box<dyn RowCursor + '_>> {
        let columns: Vec<ColumnMeta> = self
            .stmt
            .columns()
            .iter()
            .enumerate()
            .map(|(idx, column)| ColumnMeta {
                label: column.name().to_string(),
                ordinal: idx + 1,
                decl_type: column.decl_type().map(str::to_string),
            })
            .collect();

        let rows = self.stmt.raw_query();
        Ok(Box::new(SqliteCursor { columns, rows }))
    }
}

struct SqliteCursor<'s> {
    columns: Vec<ColumnMeta>,
    rows: rusqlite::Rows<'s>,
}

impl RowCursor for SqliteCursor<'_> {
    fn columns(&self) -> &[ColumnMeta] {
        &self.columns
    }

    fn advance(&mut self) -> ConnectionResult<Option<Row>> {
        let row = match self
            .rows
            .next()
            .map_err(|e| ConnectionError::Read(e.to_string()))?
        {
            Some(row) => row,
            None => return Ok(None),
        };

        let mut values = Vec::with_capacity(self.columns.len());
        for idx in 0..self.columns.len() {
            let cell = row
                .get_ref(idx)
                .map_err(|e| ConnectionError::Read(e.to_string()))?;
            values.push(render_value(cell));
        }
        Ok(Some(values))
    }
}

/// String rendering of a SQLite value; BLOBs render as base64 text
fn render_value(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) => Some(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Some(BASE64.encode(b)),
    }
}
