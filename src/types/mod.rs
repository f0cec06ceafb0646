//! Core data types for parameterized queries

pub mod query;
pub mod value;

pub use query::ParsedQuery;
pub use value::Value;
