//! The search collaborator seam.
//!
//! Transport lives outside this crate. A provider turns a plain query into
//! whatever the platforms reported, one [`Candidate`] per hit.

use exn::ResultExt;
use serde::{Deserialize, Serialize};
use shelf_genre::models::Platform;

use crate::error::{ErrorKind, Result};

/// A single platform's report for a search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub platform: Platform,
    /// The title as the platform lists it.
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    /// The platform's own genre string, before mapping.
    pub genre: String,
}
impl Candidate {
    pub fn new(platform: Platform, title: impl Into<String>, genre: impl Into<String>) -> Self {
        Self { platform, title: title.into(), author: None, genre: genre.into() }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// Parses a crawler's JSON output (an array of candidates).
pub fn parse_candidates(json: &str) -> Result<Vec<Candidate>> {
    serde_json::from_str(json).or_raise(|| ErrorKind::InvalidResponse)
}

/// Looks a title up on external platforms.
///
/// Calls may block; the classifier bounds each one with a timeout and treats
/// an error exactly like an empty answer.
pub trait SearchProvider: Send + Sync {
    fn search(&self, query: &str) -> Result<Vec<Candidate>>;
}

impl<F> SearchProvider for F
where
    F: Fn(&str) -> Result<Vec<Candidate>> + Send + Sync,
{
    fn search(&self, query: &str) -> Result<Vec<Candidate>> {
        self(query)
    }
}

/// A provider that never finds anything, for offline runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSearch;
impl SearchProvider for NoSearch {
    fn search(&self, _query: &str) -> Result<Vec<Candidate>> {
        Ok(Vec::new())
    }
}
