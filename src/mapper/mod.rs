//! Row-to-document materialization
//!
//! Converts a result cursor into a JSON or XML document, and optionally
//! expands cells that contain serialized documents into nested structured
//! content. Result sets are fully materialized in memory; there is no
//! streaming contract.

mod errors;
pub mod expand;
pub mod json;
pub mod xml;

pub use errors::{ShapeError, ShapeResult};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::connection::{ColumnMeta, ConnectionResult, Row, RowCursor};

    /// In-memory cursor over pre-built rows
    pub struct VecCursor {
        columns: Vec<ColumnMeta>,
        rows: std::vec::IntoIter<Row>,
    }

    impl VecCursor {
        pub fn new(labels: &[&str], rows: Vec<Row>) -> Self {
            let columns = labels
                .iter()
                .enumerate()
                .map(|(idx, label)| ColumnMeta {
                    label: label.to_string(),
                    ordinal: idx + 1,
                    decl_type: None,
                })
                .collect();
            Self {
                columns,
                rows: rows.into_iter(),
            }
        }
    }

    impl RowCursor for VecCursor {
        fn columns(&self) -> &[ColumnMeta] {
            &self.columns
        }

        fn advance(&mut self) -> ConnectionResult<Option<Row>> {
            Ok(self.rows.next())
        }
    }
}
