//! XML document errors

use thiserror::Error;

/// Result type for XML document operations
pub type XmlResult<T> = Result<T, XmlError>;

/// XML parsing and serialization errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum XmlError {
    #[error("Malformed XML: {0}")]
    Parse(String),

    #[error("Document has no root element")]
    NoRootElement,

    #[error("Content found after the root element")]
    TrailingContent,

    #[error("Serialization failed: {0}")]
    Serialize(String),
}
