/// Structured metadata recovered from the residual of a filename, i.e.
/// everything from the first metadata trigger onward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResidualInfo {
    /// Part or volume designation, e.g. `"2부"` or `"1-3권"`.
    pub volume_info: String,
    /// Chapter range with leading zeros stripped, e.g. `"1-242"`.
    pub range_info: String,
    pub is_completed: bool,
    /// Side-story tags in order of first discovery, without duplicates.
    pub side_story_tags: Vec<String>,
    /// Text that could not be attributed to any other field.
    pub annotations: Vec<String>,
}
impl ResidualInfo {
    /// Whether nothing at all was recognised.
    pub fn is_empty(&self) -> bool {
        self.volume_info.is_empty()
            && self.range_info.is_empty()
            && !self.is_completed
            && self.side_story_tags.is_empty()
            && self.annotations.is_empty()
    }
}
