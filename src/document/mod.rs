//! In-memory result documents
//!
//! A materialization operation produces one `Document`, constructed fully
//! in memory and never mutated afterwards. Serialization of the final form
//! happens at the caller (the CLI), not inside the engine.

mod errors;
mod xml;

pub use errors::{XmlError, XmlResult};
pub use xml::{Element, XmlNode};

use serde_json::Value;

/// A structured result document, JSON or XML variant
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Json(Value),
    Xml(Element),
}

impl Document {
    /// Pretty-printed serialized form, for console output
    pub fn to_pretty_string(&self) -> XmlResult<String> {
        match self {
            Document::Json(value) => serde_json::to_string_pretty(value)
                .map_err(|e| XmlError::Serialize(e.to_string())),
            Document::Xml(element) => element.to_pretty_string(),
        }
    }
}
