use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{Confidence, Genre, Source};

/// The fixed-shape outcome of classifying one title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    pub genre: Genre,
    pub confidence: Confidence,
    pub source: Source,
    #[serde(with = "time::serde::rfc3339")]
    pub cached_at: OffsetDateTime,
}
impl ClassificationRecord {
    /// A record stamped with the current UTC time.
    pub fn new(genre: Genre, confidence: Confidence, source: Source) -> Self {
        Self { genre, confidence, source, cached_at: OffsetDateTime::now_utc() }
    }

    /// The terminal "nothing matched" outcome.
    pub fn unclassified() -> Self {
        Self::new(Genre::Unclassified, Confidence::Low, Source::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Platform;
    use time::macros::datetime;

    #[test]
    fn serializes_timestamp_as_rfc3339() {
        let record = ClassificationRecord {
            genre: Genre::Wuxia,
            confidence: Confidence::High,
            source: Source::Platform(Platform::Munpia),
            cached_at: datetime!(2024-05-01 12:30:00 UTC),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"genre":"무협","confidence":"high","source":"munpia","cached_at":"2024-05-01T12:30:00Z"}"#
        );
        assert_eq!(serde_json::from_str::<ClassificationRecord>(&json).unwrap(), record);
    }

    #[test]
    fn unclassified_is_low_confidence() {
        let record = ClassificationRecord::unclassified();
        assert_eq!(record.genre, Genre::Unclassified);
        assert_eq!(record.confidence, Confidence::Low);
        assert_eq!(record.source, Source::None);
    }
}
