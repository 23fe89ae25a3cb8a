use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::Deref,
    str::FromStr,
};

use super::Platform;
use crate::error::Error;

/// Where a classification came from.
///
/// Serialized as a plain string: `"cache"`, `"keyword"`, `"tag"`, `"none"`,
/// or the identifier of the platform that reported the genre.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Source {
    Cache,
    Platform(Platform),
    Keyword,
    /// A bracketed genre tag in the filename itself.
    Tag,
    #[default]
    None,
}
impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Cache => "cache",
            Source::Platform(platform) => platform.as_str(),
            Source::Keyword => "keyword",
            Source::Tag => "tag",
            Source::None => "none",
        }
    }
}
impl FromStr for Source {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "cache" => Source::Cache,
            "keyword" => Source::Keyword,
            "tag" => Source::Tag,
            "none" | "" => Source::None,
            _ => Source::Platform(s.parse()?),
        })
    }
}
impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
impl Serialize for Source {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for Source {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(|e: Error| de::Error::custom(e.deref()))
    }
}
