//! Error types for the parameterizer

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Coercion errors
    #[error("Integer literal out of range: {0}")]
    IntegerOverflow(String),

    /// The shape guard admitted a token the numeric parser rejected.
    /// Indicates a defect in the matcher, not bad user input.
    #[error("Malformed numeric literal: {0}")]
    NumericParse(String),

    // Binding errors
    #[error("Bind rejected at index {index}: {reason}")]
    Binding { index: usize, reason: String },
}
