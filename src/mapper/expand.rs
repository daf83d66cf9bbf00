//! Embedded document expansion
//!
//! Post-processes a single-column result document by re-parsing each
//! cell's string content as a nested document of the same format and
//! splicing the parsed tree in place of the raw escaped text. The cell
//! keeps its column key (JSON) or element name (XML); only its content is
//! replaced.
//!
//! Preconditions are checked per row and any violation or per-cell parse
//! failure fails the whole operation.

use serde_json::{Map, Value};

use crate::document::{Element, XmlNode};

use super::errors::{ShapeError, ShapeResult};

/// Expand a raw `{"rows": [...]}` document whose single column holds
/// serialized JSON objects.
pub fn expand_json(raw: Value) -> ShapeResult<Value> {
    let rows = match raw {
        Value::Object(mut obj) => match obj.remove("rows") {
            Some(Value::Array(rows)) => rows,
            _ => return Err(ShapeError::MissingRows),
        },
        _ => return Err(ShapeError::MissingRows),
    };

    let mut expanded_rows = Vec::with_capacity(rows.len());
    for (idx, row) in rows.into_iter().enumerate() {
        let row_object = match row {
            Value::Object(obj) => obj,
            _ => return Err(ShapeError::RowNotObject { row: idx }),
        };
        if row_object.len() != 1 {
            return Err(ShapeError::ColumnCount {
                row: idx,
                found: row_object.len(),
            });
        }

        let (label, cell) = match row_object.into_iter().next() {
            Some(entry) => entry,
            None => return Err(ShapeError::ColumnCount { row: idx, found: 0 }),
        };
        let serialized = match cell {
            Value::String(s) => s,
            _ => return Err(ShapeError::CellNotText { row: idx }),
        };

        let nested: Value = serde_json::from_str(&serialized).map_err(|e| {
            ShapeError::MalformedCell {
                row: idx,
                reason: e.to_string(),
            }
        })?;
        if !nested.is_object() {
            return Err(ShapeError::MalformedCell {
                row: idx,
                reason: "not a JSON object".to_string(),
            });
        }

        let mut expanded = Map::new();
        expanded.insert(label, nested);
        expanded_rows.push(Value::Object(expanded));
    }

    let mut document = Map::new();
    document.insert("rows".to_string(), Value::Array(expanded_rows));
    Ok(Value::Object(document))
}

/// Expand a raw `<rows>` document whose single column holds serialized
/// XML element content.
pub fn expand_xml(raw: Element) -> ShapeResult<Element> {
    if raw.name() != "rows" {
        return Err(ShapeError::MissingRows);
    }
    for child in raw.child_elements() {
        if child.name() != "row" {
            return Err(ShapeError::UnexpectedElement {
                name: child.name().to_string(),
            });
        }
    }

    let mut rows = Element::new("rows");
    for (idx, row) in raw.child_elements().enumerate() {
        let column_count = row.child_elements().count();
        if column_count != 1 {
            return Err(ShapeError::ColumnCount {
                row: idx,
                found: column_count,
            });
        }
        let cell = match row.child_elements().next() {
            Some(cell) => cell,
            None => return Err(ShapeError::ColumnCount { row: idx, found: 0 }),
        };

        let nested = Element::parse(&cell.text()).map_err(|e| ShapeError::MalformedCell {
            row: idx,
            reason: e.to_string(),
        })?;

        let mut expanded_cell = cell.clone();
        expanded_cell.set_children(vec![XmlNode::Element(nested)]);
        rows = rows.with_child(Element::new("row").with_child(expanded_cell));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expand_json_splices_nested_object() {
        let raw = json!({"rows": [{"json_object": "{\"x\":1}"}]});
        assert_eq!(
            expand_json(raw).unwrap(),
            json!({"rows": [{"json_object": {"x": 1}}]})
        );
    }

    #[test]
    fn test_expand_json_empty_rows() {
        assert_eq!(expand_json(json!({"rows": []})).unwrap(), json!({"rows": []}));
    }

    #[test]
    fn test_expand_json_rejects_two_columns() {
        let raw = json!({"rows": [{"a": "{}", "b": "{}"}]});
        assert_eq!(
            expand_json(raw).unwrap_err(),
            ShapeError::ColumnCount { row: 0, found: 2 }
        );
    }

    #[test]
    fn test_expand_json_rejects_null_cell() {
        let raw = json!({"rows": [{"a": null}]});
        assert_eq!(
            expand_json(raw).unwrap_err(),
            ShapeError::CellNotText { row: 0 }
        );
    }

    #[test]
    fn test_expand_json_rejects_malformed_cell() {
        let raw = json!({"rows": [{"a": "{\"x\":1}"}, {"a": "{not json"}]});
        assert!(matches!(
            expand_json(raw).unwrap_err(),
            ShapeError::MalformedCell { row: 1, .. }
        ));
    }

    #[test]
    fn test_expand_json_rejects_non_object_cell_content() {
        let raw = json!({"rows": [{"a": "[1,2]"}]});
        assert!(matches!(
            expand_json(raw).unwrap_err(),
            ShapeError::MalformedCell { row: 0, .. }
        ));
    }

    #[test]
    fn test_expand_json_rejects_missing_rows() {
        assert_eq!(
            expand_json(json!({"data": []})).unwrap_err(),
            ShapeError::MissingRows
        );
    }

    #[test]
    fn test_expand_xml_splices_nested_element() {
        let raw = Element::new("rows").with_child(
            Element::new("row")
                .with_child(Element::new("doc").with_text("<x><y>1</y></x>")),
        );

        let expanded = expand_xml(raw).unwrap();
        let cell = expanded
            .child_elements()
            .next()
            .unwrap()
            .child_elements()
            .next()
            .unwrap();

        // The cell keeps its column name; its content is now the parsed tree
        assert_eq!(cell.name(), "doc");
        let nested = cell.child_elements().next().unwrap();
        assert_eq!(nested.name(), "x");
        assert_eq!(nested.child_elements().next().unwrap().text(), "1");
    }

    #[test]
    fn test_expand_xml_rejects_two_columns() {
        let raw = Element::new("rows").with_child(
            Element::new("row")
                .with_child(Element::new("a").with_text("<x/>"))
                .with_child(Element::new("b").with_text("<y/>")),
        );
        assert_eq!(
            expand_xml(raw).unwrap_err(),
            ShapeError::ColumnCount { row: 0, found: 2 }
        );
    }

    #[test]
    fn test_expand_xml_rejects_wrong_root() {
        assert_eq!(
            expand_xml(Element::new("table")).unwrap_err(),
            ShapeError::MissingRows
        );
    }

    #[test]
    fn test_expand_xml_rejects_unexpected_child() {
        let raw = Element::new("rows").with_child(Element::new("record"));
        assert_eq!(
            expand_xml(raw).unwrap_err(),
            ShapeError::UnexpectedElement {
                name: "record".to_string()
            }
        );
    }

    #[test]
    fn test_expand_xml_rejects_malformed_cell() {
        let raw = Element::new("rows").with_child(
            Element::new("row").with_child(Element::new("doc").with_text("<x><y></x>")),
        );
        assert!(matches!(
            expand_xml(raw).unwrap_err(),
            ShapeError::MalformedCell { row: 0, .. }
        ));
    }
}
