//! Query-backed connection functions
//!
//! Each function kind is a stateless specification of how to produce a
//! query (or metadata lookup) plus its bound parameters, with a single
//! `build` operation that executes against a supplied connection and
//! returns a fully materialized document. The registry maps string names
//! to function factories taking a flat argument list.

mod errors;
mod kind;
mod registry;

pub use errors::{FunctionError, FunctionResult};
pub use kind::ConnectionFunction;
pub use registry::FunctionRegistry;
