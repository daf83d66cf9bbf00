//! sqldoc - parameterized SQL queries materialized as JSON or XML documents
//!
//! One invocation executes one query (or one metadata lookup) against a
//! named datasource and returns the fully materialized result document.

pub mod cli;
pub mod connection;
pub mod datasource;
pub mod document;
pub mod functions;
pub mod mapper;
pub mod params;
