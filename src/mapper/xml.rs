//! XML row mapper
//!
//! Materializes a cursor as a `<rows>` element containing one `<row>` per
//! record and one child element per column, named after the column label.
//! A null column yields an empty element with a `null="true"` attribute;
//! a non-null column yields that element with a single text child and no
//! attribute. The attribute is present if and only if the value is null.
//!
//! Column labels are used as element names verbatim; labels that are not
//! legal element names produce undefined output (documented limitation,
//! not validated).

use crate::connection::{ConnectionResult, RowCursor};
use crate::document::Element;

/// Materialize the full cursor as an XML element tree
pub fn materialize_rows(cursor: &mut dyn RowCursor) -> ConnectionResult<Element> {
    let labels: Vec<String> = cursor.columns().iter().map(|c| c.label.clone()).collect();

    let mut rows = Element::new("rows");
    while let Some(row) = cursor.advance()? {
        let mut row_element = Element::new("row");
        for (label, value) in labels.iter().zip(row) {
            let cell = match value {
                Some(v) => Element::new(label.clone()).with_text(v),
                None => Element::new(label.clone()).with_attribute("null", "true"),
            };
            row_element = row_element.with_child(cell);
        }
        rows = rows.with_child(row_element);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::test_support::VecCursor;

    #[test]
    fn test_zero_rows_yields_empty_rows_element() {
        let mut cursor = VecCursor::new(&["id"], vec![]);
        let element = materialize_rows(&mut cursor).unwrap();
        assert_eq!(element.name(), "rows");
        assert!(element.children().is_empty());
        assert_eq!(element.to_pretty_string().unwrap(), "<rows/>");
    }

    #[test]
    fn test_null_marker_attribute() {
        let mut cursor = VecCursor::new(
            &["id", "name"],
            vec![vec![Some("1".into()), None]],
        );

        let rows = materialize_rows(&mut cursor).unwrap();
        let row = rows.child_elements().next().unwrap();

        let id = row.child_elements().next().unwrap();
        assert_eq!(id.name(), "id");
        assert_eq!(id.text(), "1");
        // Attribute present if and only if null
        assert_eq!(id.attribute("null"), None);

        let name = row.child_elements().nth(1).unwrap();
        assert_eq!(name.attribute("null"), Some("true"));
        assert!(name.children().is_empty());
    }

    #[test]
    fn test_empty_string_is_not_null() {
        let mut cursor = VecCursor::new(&["s"], vec![vec![Some(String::new())]]);
        let rows = materialize_rows(&mut cursor).unwrap();
        let cell = rows
            .child_elements()
            .next()
            .unwrap()
            .child_elements()
            .next()
            .unwrap();
        assert_eq!(cell.attribute("null"), None);
        assert_eq!(cell.text(), "");
    }

    #[test]
    fn test_column_order_follows_ordinals() {
        let mut cursor = VecCursor::new(&["b", "a"], vec![vec![Some("1".into()), Some("2".into())]]);
        let rows = materialize_rows(&mut cursor).unwrap();
        let names: Vec<&str> = rows
            .child_elements()
            .next()
            .unwrap()
            .child_elements()
            .map(|e| e.name())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
