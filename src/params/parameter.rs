//! Typed parameter construction and positional binding

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::connection::{ConnectionResult, PreparedQuery, SqlValue};

use super::errors::{ParameterError, ParameterResult};
use super::wire_type::WireType;

/// A value paired with an explicit wire type, bindable onto a positional
/// placeholder.
///
/// Construction coerces the string literal into the wire type's storage
/// class up front, so a malformed literal fails before any database work.
/// A `NULL` wire type normalizes the value to SQL null regardless of the
/// literal supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParameter {
    value: SqlValue,
    wire_type: WireType,
}

impl QueryParameter {
    /// Build a parameter from a literal and a wire-type name
    pub fn from_pair(literal: &str, type_name: &str) -> ParameterResult<Self> {
        let wire_type: WireType = type_name.parse()?;
        let value = coerce(literal, wire_type)?;
        Ok(Self { value, wire_type })
    }

    /// The coerced value to bind
    pub fn value(&self) -> &SqlValue {
        &self.value
    }

    /// The wire type the caller declared
    pub fn wire_type(&self) -> WireType {
        self.wire_type
    }
}

/// Parse a flat argument list into typed parameters.
///
/// Arguments are consumed pairwise as `(value, typeName)`; an odd-length
/// list fails without producing any parameters.
pub fn parse_parameters(args: &[String]) -> ParameterResult<Vec<QueryParameter>> {
    if args.len() % 2 != 0 {
        return Err(ParameterError::OddArgumentCount(args.len()));
    }
    args.chunks_exact(2)
        .map(|pair| QueryParameter::from_pair(&pair[0], &pair[1]))
        .collect()
}

/// Bind parameters onto a prepared query, left to right.
///
/// Placeholder addressing is 1-based. A `NULL`-typed parameter binds an
/// actual SQL null, never the literal string "NULL".
pub fn bind_parameters(
    query: &mut dyn PreparedQuery,
    parameters: &[QueryParameter],
) -> ConnectionResult<()> {
    for (idx, parameter) in parameters.iter().enumerate() {
        query.bind(idx + 1, parameter.value())?;
    }
    Ok(())
}

fn coerce(literal: &str, wire_type: WireType) -> ParameterResult<SqlValue> {
    let invalid = || ParameterError::InvalidLiteral {
        wire_type: wire_type.name().to_string(),
        literal: literal.to_string(),
    };

    match wire_type {
        WireType::Null => Ok(SqlValue::Null),

        WireType::Varchar | WireType::Char | WireType::LongVarchar | WireType::Clob => {
            Ok(SqlValue::Text(literal.to_string()))
        }

        WireType::Integer | WireType::SmallInt | WireType::BigInt | WireType::TinyInt => literal
            .parse::<i64>()
            .map(SqlValue::Integer)
            .map_err(|_| invalid()),

        WireType::Decimal
        | WireType::Numeric
        | WireType::Real
        | WireType::Float
        | WireType::Double => literal
            .parse::<f64>()
            .map(SqlValue::Real)
            .map_err(|_| invalid()),

        WireType::Boolean | WireType::Bit => match literal.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(SqlValue::Boolean(true)),
            "false" | "0" => Ok(SqlValue::Boolean(false)),
            _ => Err(invalid()),
        },

        // Temporal literals are validated here but bound as text; the
        // backend stores them in its own temporal representation.
        WireType::Date => NaiveDate::parse_from_str(literal, "%Y-%m-%d")
            .map(|_| SqlValue::Text(literal.to_string()))
            .map_err(|_| invalid()),

        WireType::Time => NaiveTime::parse_from_str(literal, "%H:%M:%S%.f")
            .map(|_| SqlValue::Text(literal.to_string()))
            .map_err(|_| invalid()),

        WireType::Timestamp => NaiveDateTime::parse_from_str(literal, "%Y-%m-%d %H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(literal, "%Y-%m-%dT%H:%M:%S%.f"))
            .map(|_| SqlValue::Text(literal.to_string()))
            .map_err(|_| invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_empty_list() {
        assert_eq!(parse_parameters(&[]).unwrap(), Vec::new());
    }

    #[test]
    fn test_parse_pairs_in_order() {
        let params =
            parse_parameters(&strings(&["bob", "VARCHAR", "42", "integer", "3.5", "DECIMAL"]))
                .unwrap();

        assert_eq!(params.len(), 3);
        assert_eq!(params[0].value(), &SqlValue::Text("bob".into()));
        assert_eq!(params[0].wire_type(), WireType::Varchar);
        assert_eq!(params[1].value(), &SqlValue::Integer(42));
        assert_eq!(params[2].value(), &SqlValue::Real(3.5));
    }

    #[test]
    fn test_odd_argument_count_is_rejected() {
        let err = parse_parameters(&strings(&["bob", "VARCHAR", "42"])).unwrap_err();
        assert_eq!(err, ParameterError::OddArgumentCount(3));
    }

    #[test]
    fn test_null_wire_type_discards_literal() {
        let param = QueryParameter::from_pair("anything at all", "null").unwrap();
        assert_eq!(param.value(), &SqlValue::Null);
        assert_eq!(param.wire_type(), WireType::Null);
    }

    #[test]
    fn test_invalid_integer_literal() {
        let err = QueryParameter::from_pair("forty-two", "INTEGER").unwrap_err();
        assert_eq!(
            err,
            ParameterError::InvalidLiteral {
                wire_type: "INTEGER".into(),
                literal: "forty-two".into(),
            }
        );
    }

    #[test]
    fn test_boolean_literals() {
        assert_eq!(
            QueryParameter::from_pair("TRUE", "BOOLEAN").unwrap().value(),
            &SqlValue::Boolean(true)
        );
        assert_eq!(
            QueryParameter::from_pair("0", "BIT").unwrap().value(),
            &SqlValue::Boolean(false)
        );
        assert!(QueryParameter::from_pair("yes", "BOOLEAN").is_err());
    }

    #[test]
    fn test_temporal_literals_are_validated() {
        assert!(QueryParameter::from_pair("2025-02-28", "DATE").is_ok());
        assert!(QueryParameter::from_pair("2025-02-30", "DATE").is_err());
        assert!(QueryParameter::from_pair("13:45:00", "TIME").is_ok());
        assert!(QueryParameter::from_pair("2025-02-28 13:45:00", "TIMESTAMP").is_ok());
        assert!(QueryParameter::from_pair("2025-02-28T13:45:00", "TIMESTAMP").is_ok());
        assert!(QueryParameter::from_pair("not a timestamp", "TIMESTAMP").is_err());
    }

    #[test]
    fn test_binding_order_is_input_order() {
        #[derive(Debug)]
        struct RecordingQuery {
            bound: Vec<(usize, SqlValue)>,
        }

        impl PreparedQuery for RecordingQuery {
            fn bind(&mut self, index: usize, value: &SqlValue) -> ConnectionResult<()> {
                self.bound.push((index, value.clone()));
                Ok(())
            }

            fn cursor(&mut self) -> ConnectionResult<Box<dyn crate::connection::RowCursor + '_>> {
                unreachable!("not used in this test")
            }
        }

        let params =
            parse_parameters(&strings(&["a", "VARCHAR", "1", "INTEGER", "x", "NULL"])).unwrap();

        let mut query = RecordingQuery { bound: Vec::new() };
        bind_parameters(&mut query, &params).unwrap();

        assert_eq!(
            query.bound,
            vec![
                (1, SqlValue::Text("a".into())),
                (2, SqlValue::Integer(1)),
                (3, SqlValue::Null),
            ]
        );
    }
}
