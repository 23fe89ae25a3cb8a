mod anchor;
pub mod clean;
mod consts;
pub mod models;
mod residual;

use tracing::instrument;

pub use crate::anchor::split_anchor;
use crate::clean::{Cleaned, clean, split_extension};
use crate::models::TitleParseResult;
pub use crate::residual::{normalize_side_story, parse_residual};

/// Easy, top-level entrypoint that splits a raw filename into a title anchor
/// and structured metadata.
///
/// Pure and deterministic. A name without any recognisable metadata is not
/// an error: the whole cleaned name becomes the title.
#[instrument(level = "debug")]
pub fn extract(raw: &str) -> TitleParseResult {
    let (stem, extension) = split_extension(raw.trim());
    let Cleaned { text, author, tagged_genre, annotations } = clean(stem);
    let (title, residual) = split_anchor(&text);
    let parsed = parse_residual(&residual);
    tracing::trace!(%title, %residual, "split title anchor");
    TitleParseResult::new(title, author, extension, tagged_genre, annotations, parsed)
}
