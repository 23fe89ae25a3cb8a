//! Library Error Types
//!
//! Structured errors using `exn` for automatic location tracking.

use derive_more::{Display, Error};

/// A library error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    #[display("issue with name generation from template")]
    Template,
    /// Every numbered variant of the name is already taken.
    #[display("no free name for {_0}")]
    Collision(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Files may have been moved away from the target in the meantime.
        matches!(self, ErrorKind::Collision(_))
    }
}
