//! Classify Error Types
//!
//! Structured errors using `exn` for automatic location tracking. None of
//! these reach a caller of [`SearchFirstClassifier::classify`](crate::SearchFirstClassifier::classify):
//! search failures degrade to the keyword fallback and unreadable keyword
//! rules fall back to the built-in set.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A classify error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for classify operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The search collaborator could not be reached or failed mid-call.
    #[display("search unavailable")]
    SearchUnavailable,
    /// The search collaborator answered with something that is not a candidate list.
    #[display("invalid search response")]
    InvalidResponse,
    /// The keyword ruleset could not be read.
    #[display("could not read keyword rules: {}", _0.display())]
    KeywordsUnreadable(#[error(not(source))] PathBuf),
    /// The keyword ruleset was read but is not a valid rule document.
    #[display("invalid keyword rules")]
    KeywordsInvalid,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::SearchUnavailable | ErrorKind::KeywordsUnreadable(_))
    }
}
