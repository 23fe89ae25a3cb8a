//! Genre Error Types
//!
//! Structured errors using `exn` for automatic location tracking.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A genre error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for genre operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value could not be parsed into one of the closed vocabularies.
    #[display("failed to parse {field}, found value: {value}")]
    ParseError {
        field: &'static str,
        value: String,
    },
    /// The mapping resource could not be read.
    #[display("could not read mapping rules: {}", _0.display())]
    MappingUnreadable(#[error(not(source))] PathBuf),
    /// The mapping resource was read but is not a valid rule document.
    #[display("invalid mapping rules: {}", _0.display())]
    MappingInvalid(#[error(not(source))] PathBuf),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::MappingUnreadable(_))
    }
}
