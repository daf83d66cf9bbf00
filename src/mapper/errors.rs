//! Embedded-expansion shape errors
//!
//! Expansion preconditions are hard failures. Partially-expanded output
//! would be silently misleading to a caller that expects either raw or
//! fully expanded content, so the whole operation fails on the first
//! violating row.

use thiserror::Error;

/// Result type for embedded-document expansion
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Shape violations during embedded-document expansion
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Expected a document with a 'rows' array at the top level")]
    MissingRows,

    #[error("Row {row} is not an object")]
    RowNotObject { row: usize },

    #[error("Unexpected element '{name}' under 'rows', expected 'row'")]
    UnexpectedElement { name: String },

    #[error("Row {row} has {found} columns, expected exactly 1")]
    ColumnCount { row: usize, found: usize },

    #[error("Row {row}: cell is null or not a string, cannot expand")]
    CellNotText { row: usize },

    #[error("Row {row}: cell content is not a valid nested document: {reason}")]
    MalformedCell { row: usize, reason: String },
}
