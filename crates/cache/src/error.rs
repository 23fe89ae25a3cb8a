//! Cache Error Types
//!
//! Structured errors using `exn` for automatic location tracking. Nothing in
//! this crate is fatal to a caller: [`GenreCache`](crate::GenreCache) logs
//! these and keeps serving from memory.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A cache error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for cache operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The persisted cache could not be read or written.
    #[display("cache file I/O error: {}", _0.display())]
    Io(#[error(not(source))] PathBuf),
    /// Serialization/deserialization error.
    #[display("invalid cache data")]
    InvalidData,
    /// The backing store refused the write.
    #[display("cache store unavailable")]
    Unavailable,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::Io(_) | ErrorKind::Unavailable)
    }
}
