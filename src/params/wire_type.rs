//! SQL wire types
//!
//! A closed enumeration of the parameter types the binder understands.
//! Names parse case-insensitively; unrecognized names are an error, never
//! a silent default.

use std::fmt;
use std::str::FromStr;

use super::errors::ParameterError;

/// Wire type tag identifying how a parameter value is bound to a placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Varchar,
    Char,
    LongVarchar,
    Clob,
    Integer,
    SmallInt,
    BigInt,
    TinyInt,
    Decimal,
    Numeric,
    Real,
    Float,
    Double,
    Boolean,
    Bit,
    Date,
    Time,
    Timestamp,
    Null,
}

impl WireType {
    /// Canonical uppercase name of this wire type
    pub fn name(&self) -> &'static str {
        match self {
            WireType::Varchar => "VARCHAR",
            WireType::Char => "CHAR",
            WireType::LongVarchar => "LONGVARCHAR",
            WireType::Clob => "CLOB",
            WireType::Integer => "INTEGER",
            WireType::SmallInt => "SMALLINT",
            WireType::BigInt => "BIGINT",
            WireType::TinyInt => "TINYINT",
            WireType::Decimal => "DECIMAL",
            WireType::Numeric => "NUMERIC",
            WireType::Real => "REAL",
            WireType::Float => "FLOAT",
            WireType::Double => "DOUBLE",
            WireType::Boolean => "BOOLEAN",
            WireType::Bit => "BIT",
            WireType::Date => "DATE",
            WireType::Time => "TIME",
            WireType::Timestamp => "TIMESTAMP",
            WireType::Null => "NULL",
        }
    }
}

impl FromStr for WireType {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "VARCHAR" => Ok(WireType::Varchar),
            "CHAR" => Ok(WireType::Char),
            "LONGVARCHAR" => Ok(WireType::LongVarchar),
            "CLOB" => Ok(WireType::Clob),
            "INTEGER" => Ok(WireType::Integer),
            "SMALLINT" => Ok(WireType::SmallInt),
            "BIGINT" => Ok(WireType::BigInt),
            "TINYINT" => Ok(WireType::TinyInt),
            "DECIMAL" => Ok(WireType::Decimal),
            "NUMERIC" => Ok(WireType::Numeric),
            "REAL" => Ok(WireType::Real),
            "FLOAT" => Ok(WireType::Float),
            "DOUBLE" => Ok(WireType::Double),
            "BOOLEAN" => Ok(WireType::Boolean),
            "BIT" => Ok(WireType::Bit),
            "DATE" => Ok(WireType::Date),
            "TIME" => Ok(WireType::Time),
            "TIMESTAMP" => Ok(WireType::Timestamp),
            "NULL" => Ok(WireType::Null),
            _ => Err(ParameterError::UnknownType(s.to_string())),
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("varchar".parse::<WireType>().unwrap(), WireType::Varchar);
        assert_eq!("Integer".parse::<WireType>().unwrap(), WireType::Integer);
        assert_eq!("TIMESTAMP".parse::<WireType>().unwrap(), WireType::Timestamp);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let err = "GEOMETRY".parse::<WireType>().unwrap_err();
        assert_eq!(err, ParameterError::UnknownType("GEOMETRY".to_string()));
    }

    #[test]
    fn test_display_round_trip() {
        for name in ["VARCHAR", "DECIMAL", "NULL", "BIGINT"] {
            let wt: WireType = name.parse().unwrap();
            assert_eq!(wt.to_string(), name);
        }
    }
}
