//! JSON row mapper
//!
//! Materializes a cursor as `{"rows": [...]}`: one object per row, keyed
//! by column label in column-ordinal order. All non-null values are
//! strings, holding exactly the string representation the cursor reported;
//! the cursor's native typed getters are deliberately not used. A missing
//! value is the explicit JSON null, never an absent key.

use serde_json::{Map, Value};

use crate::connection::{ConnectionResult, RowCursor};

/// Materialize the full cursor as a JSON document
pub fn materialize_rows(cursor: &mut dyn RowCursor) -> ConnectionResult<Value> {
    let labels: Vec<String> = cursor.columns().iter().map(|c| c.label.clone()).collect();

    let mut rows = Vec::new();
    while let Some(row) = cursor.advance()? {
        let mut row_object = Map::new();
        for (label, value) in labels.iter().zip(row) {
            let cell = match value {
                Some(v) => Value::String(v),
                None => Value::Null,
            };
            row_object.insert(label.clone(), cell);
        }
        rows.push(Value::Object(row_object));
    }

    let mut document = Map::new();
    document.insert("rows".to_string(), Value::Array(rows));
    Ok(Value::Object(document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::test_support::VecCursor;
    use serde_json::json;

    #[test]
    fn test_zero_rows_yields_empty_rows_array() {
        let mut cursor = VecCursor::new(&["id"], vec![]);
        assert_eq!(materialize_rows(&mut cursor).unwrap(), json!({"rows": []}));
    }

    #[test]
    fn test_null_cell_yields_json_null() {
        let mut cursor = VecCursor::new(
            &["id", "name"],
            vec![
                vec![Some("1".into()), None],
                vec![Some("2".into()), Some("bob".into())],
            ],
        );

        assert_eq!(
            materialize_rows(&mut cursor).unwrap(),
            json!({"rows": [
                {"id": "1", "name": null},
                {"id": "2", "name": "bob"},
            ]})
        );
    }

    #[test]
    fn test_column_order_follows_ordinals_not_names() {
        let mut cursor = VecCursor::new(&["b", "a"], vec![vec![Some("1".into()), Some("2".into())]]);

        let doc = materialize_rows(&mut cursor).unwrap();
        let keys: Vec<&String> = doc["rows"][0].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_values_stay_strings() {
        let mut cursor = VecCursor::new(&["n"], vec![vec![Some("42".into())]]);
        let doc = materialize_rows(&mut cursor).unwrap();
        // No numeric reinterpretation
        assert_eq!(doc["rows"][0]["n"], json!("42"));
    }
}
