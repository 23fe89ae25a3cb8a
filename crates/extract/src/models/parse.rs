use super::ResidualInfo;

/// The result of splitting a raw filename into its title anchor and metadata.
///
/// The split is total and non-overlapping: every token of the cleaned name
/// ends up either in [`title`](Self::title) or in exactly one of the
/// metadata fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TitleParseResult {
    /// Noise-free title. May be empty when the name starts with metadata.
    pub title: String,
    pub author: Option<String>,
    pub volume_info: String,
    pub range_info: String,
    pub is_completed: bool,
    pub side_story_tags: Vec<String>,
    /// File extension including the leading dot, or empty.
    pub extension: String,
    /// Inner text of the first bracketed genre tag found in the name.
    pub tagged_genre: Option<String>,
    /// Maturity-rating tags (verbatim) followed by any unattributed residual text.
    pub annotations: Vec<String>,
}
impl TitleParseResult {
    pub(crate) fn new(
        title: String,
        author: Option<String>,
        extension: &str,
        tagged_genre: Option<String>,
        mut annotations: Vec<String>,
        residual: ResidualInfo,
    ) -> Self {
        annotations.extend(residual.annotations);
        Self {
            title,
            author,
            volume_info: residual.volume_info,
            range_info: residual.range_info,
            is_completed: residual.is_completed,
            side_story_tags: residual.side_story_tags,
            extension: extension.to_string(),
            tagged_genre,
            annotations,
        }
    }
}
