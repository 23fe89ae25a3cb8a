//! Genre vocabulary shared by the classifier and the name builder: the closed
//! [`Genre`](models::Genre) whitelist, platform identifiers, classification
//! records, the [`GenreMapping`] rule table and [`SimilarityChecker`] gating.

pub mod error;
mod mapping;
pub mod models;
mod similarity;

pub use crate::mapping::GenreMapping;
pub use crate::similarity::{
    AUTHOR_MATCH_THRESHOLD, DEFAULT_THRESHOLD, SimilarityCheck, SimilarityChecker, normalize as normalize_title,
};
