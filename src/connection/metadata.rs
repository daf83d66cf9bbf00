//! Fixed-shape schema introspection records
//!
//! Field sets mirror the classic JDBC `DatabaseMetaData` result shapes for
//! `getTables` and `getColumns`. Backends that cannot supply a field report
//! it as `None`; the JSON mapping renders those as explicit nulls, never as
//! absent keys.

use serde_json::{json, Map, Value};

/// Metadata for one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    pub table_cat: Option<String>,
    pub table_schema: Option<String>,
    pub table_name: String,
    pub table_type: String,
    pub remarks: Option<String>,
    pub type_cat: Option<String>,
    pub type_schema: Option<String>,
    pub type_name: Option<String>,
    pub self_referencing_col_name: Option<String>,
    pub ref_generation: Option<String>,
}

impl TableInfo {
    /// Render as the fixed JSON object shape
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("tableCat".into(), nullable_str(&self.table_cat));
        obj.insert("tableSchema".into(), nullable_str(&self.table_schema));
        obj.insert("tableName".into(), json!(self.table_name));
        obj.insert("tableType".into(), json!(self.table_type));
        obj.insert("remarks".into(), nullable_str(&self.remarks));
        obj.insert("typeCat".into(), nullable_str(&self.type_cat));
        obj.insert("typeSchema".into(), nullable_str(&self.type_schema));
        obj.insert("typeName".into(), nullable_str(&self.type_name));
        obj.insert(
            "selfReferencingColName".into(),
            nullable_str(&self.self_referencing_col_name),
        );
        obj.insert("refGeneration".into(), nullable_str(&self.ref_generation));
        Value::Object(obj)
    }
}

/// Metadata for one column of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub table_cat: Option<String>,
    pub table_schema: Option<String>,
    pub table_name: String,
    pub column_name: String,
    pub data_type: i32,
    pub type_name: String,
    pub column_size: i32,
    pub decimal_digits: Option<i32>,
    pub num_prec_radix: Option<i32>,
    pub nullable: Option<i32>,
    pub remarks: Option<String>,
    pub column_def: Option<String>,
    pub char_octet_length: Option<i32>,
    pub ordinal_position: Option<i32>,
    pub is_nullable: String,
    pub is_auto_increment: String,
    pub is_generated_column: String,
}

impl ColumnInfo {
    /// Render as the fixed JSON object shape
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("tableCat".into(), nullable_str(&self.table_cat));
        obj.insert("tableSchema".into(), nullable_str(&self.table_schema));
        obj.insert("tableName".into(), json!(self.table_name));
        obj.insert("columnName".into(), json!(self.column_name));
        obj.insert("dataType".into(), json!(self.data_type));
        obj.insert("typeName".into(), json!(self.type_name));
        obj.insert("columnSize".into(), json!(self.column_size));
        obj.insert("decimalDigits".into(), nullable_int(&self.decimal_digits));
        obj.insert("numPrecRadix".into(), nullable_int(&self.num_prec_radix));
        obj.insert("nullable".into(), nullable_int(&self.nullable));
        obj.insert("remarks".into(), nullable_str(&self.remarks));
        obj.insert("columnDef".into(), nullable_str(&self.column_def));
        obj.insert(
            "charOctetLength".into(),
            nullable_int(&self.char_octet_length),
        );
        obj.insert(
            "ordinalPosition".into(),
            nullable_int(&self.ordinal_position),
        );
        obj.insert("isNullable".into(), json!(self.is_nullable));
        obj.insert("isAutoIncrement".into(), json!(self.is_auto_increment));
        obj.insert("isGeneratedColumn".into(), json!(self.is_generated_column));
        Value::Object(obj)
    }
}

fn nullable_str(value: &Option<String>) -> Value {
    match value {
        Some(v) => json!(v),
        None => Value::Null,
    }
}

fn nullable_int(value: &Option<i32>) -> Value {
    match value {
        Some(v) => json!(v),
        None => Value::Null,
    }
}
