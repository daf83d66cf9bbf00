//! Typed query parameters
//!
//! Turns an ordered flat list of `(value, typeName)` string pairs into
//! typed parameters and binds them positionally onto a prepared query.
//! Parameters are immutable once built and live for one invocation only.

mod errors;
mod parameter;
mod wire_type;

pub use errors::{ParameterError, ParameterResult};
pub use parameter::{bind_parameters, parse_parameters, QueryParameter};
pub use wire_type::WireType;
