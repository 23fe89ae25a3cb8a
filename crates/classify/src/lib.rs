//! Search-first genre classification.
//!
//! [`SearchFirstClassifier`] walks each title through a fixed sequence of
//! stages and stops at the first one that yields a genre:
//!
//! 1. the persistent [`GenreCache`](shelf_cache::GenreCache),
//! 2. a bracketed genre tag found in the filename,
//! 3. an external [`SearchProvider`], arbitrated by platform priority and
//!    gated by title similarity,
//! 4. a local [`KeywordMatcher`].
//!
//! Anything that gets past all four is `미분류` with low confidence.

mod classifier;
pub mod error;
mod keywords;
mod search;
mod task;

pub use crate::classifier::{DEFAULT_SEARCH_TIMEOUT, SearchFirstClassifier};
pub use crate::keywords::{DEFAULT_MIN_SCORE, KeywordMatcher, KeywordRule, KeywordRules};
pub use crate::search::{Candidate, NoSearch, SearchProvider, parse_candidates};
pub use crate::task::{NovelTask, TaskStatus};
