use serde::{Deserialize, Serialize};
use shelf_extract::models::TitleParseResult;
use shelf_genre::models::{ClassificationRecord, Confidence, Genre, Source};

/// Lifecycle of a [`NovelTask`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
    Skipped,
}

/// The per-file work item carried through extraction, classification and
/// naming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NovelTask {
    pub raw_name: String,
    pub parse: TitleParseResult,
    pub genre: Genre,
    pub confidence: Confidence,
    pub source: Source,
    pub status: TaskStatus,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub normalized_name: Option<String>,
}
impl NovelTask {
    /// Parses `raw_name` into a pending task.
    pub fn new(raw_name: impl Into<String>) -> Self {
        let raw_name = raw_name.into();
        let parse = shelf_extract::extract(&raw_name);
        Self::from_parse(raw_name, parse)
    }

    pub fn from_parse(raw_name: impl Into<String>, parse: TitleParseResult) -> Self {
        Self {
            raw_name: raw_name.into(),
            parse,
            genre: Genre::Unclassified,
            confidence: Confidence::None,
            source: Source::None,
            status: TaskStatus::Pending,
            error: None,
            normalized_name: None,
        }
    }

    /// The text classification works on: the parsed title, or the raw name
    /// when nothing survived extraction.
    pub fn classifying_title(&self) -> &str {
        match self.parse.title.trim() {
            "" => self.raw_name.trim(),
            title => title,
        }
    }

    pub fn author(&self) -> Option<&str> {
        self.parse.author.as_deref().map(str::trim).filter(|a| !a.is_empty())
    }

    pub(crate) fn apply(&mut self, record: &ClassificationRecord, source: Source) {
        self.genre = record.genre;
        self.confidence = record.confidence;
        self.source = source;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = TaskStatus::Failed;
        self.error = Some(message.into());
    }

    /// Whether the task still needs work.
    pub fn is_open(&self) -> bool {
        matches!(self.status, TaskStatus::Pending | TaskStatus::Processing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("전지적 독자 시점 1-551 (완).txt", "전지적 독자 시점")]
    #[case("1-300.txt", "1-300.txt")]
    fn test_classifying_title(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(NovelTask::new(raw).classifying_title(), expected);
    }

    #[test]
    fn new_task_is_pending_and_unclassified() {
        let task = NovelTask::new("@비가 화산귀환 1-1500.txt");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.genre, Genre::Unclassified);
        assert_eq!(task.confidence, Confidence::None);
        assert_eq!(task.author(), Some("비가"));
        assert!(task.is_open());
    }

    #[test]
    fn serializes_with_lowercase_status() {
        let mut task = NovelTask::new("화산귀환.txt");
        task.fail("boom");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["error"], "boom");
        assert_eq!(json["genre"], "미분류");
        assert_eq!(json["parse"]["title"], "화산귀환");
        let back: NovelTask = serde_json::from_value(json).unwrap();
        assert_eq!(back, task);
    }
}
