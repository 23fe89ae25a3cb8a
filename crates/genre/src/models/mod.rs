mod confidence;
mod genre;
mod platform;
mod record;
mod source;

pub use self::confidence::Confidence;
pub use self::genre::Genre;
pub use self::platform::Platform;
pub use self::record::ClassificationRecord;
pub use self::source::Source;

fn sanitize(s: impl AsRef<str>) -> String {
    s.as_ref().trim().to_lowercase().replace(['-', '_', ' '], "")
}
