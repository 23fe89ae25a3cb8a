//! Platform genre string → standard [`Genre`] mapping.
//!
//! Rules are exact matches (after trimming) checked in order. Anything that
//! is unmapped, or whose target is not whitelisted, is [`Genre::Unclassified`].
//!
//! The rule resource is a JSON document:
//!
//! ```json
//! {
//!     "mappings": [["로맨스 판타지", "로판"], ["현대판타지", "현판"]],
//!     "whitelist": ["로판", "현판"]
//! }
//! ```
//!
//! `mappings` may also be an object (`{"로맨스 판타지": "로판"}`) and
//! `whitelist` may be omitted, in which case every standard genre is allowed.

use exn::ResultExt;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::ops::Deref;
use std::path::Path;
use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::models::Genre;

const DEFAULT_RULES: &[(&str, &str)] = &[
    ("로맨스 판타지", "로판"),
    ("로맨스판타지", "로판"),
    ("로판", "로판"),
    ("로맨스", "로판"),
    ("BL", "로판"),
    ("현대판타지", "현판"),
    ("현대 판타지", "현판"),
    ("현대물", "현판"),
    ("현판", "현판"),
    ("퓨전판타지", "퓨판"),
    ("퓨전 판타지", "퓨판"),
    ("퓨전물", "퓨판"),
    ("퓨전", "퓨판"),
    ("퓨판", "퓨판"),
    ("게임판타지", "겜판"),
    ("게임 판타지", "겜판"),
    ("게임", "겜판"),
    ("겜판", "겜판"),
    ("무협", "무협"),
    ("무협 소설", "무협"),
    ("선협", "선협"),
    ("판타지", "판타지"),
    ("정통판타지", "판타지"),
    ("정통 판타지", "판타지"),
    ("라이트노벨", "판타지"),
    ("SF", "SF"),
    ("스포츠", "스포츠"),
    ("스포츠물", "스포츠"),
    ("역사", "역사"),
    ("역사물", "역사"),
    ("대체역사", "역사"),
    ("언정", "언정"),
    ("미스터리", "소설"),
    ("소설", "소설"),
    ("패러디", "패러디"),
    ("팬픽", "패러디"),
    ("공포", "공포"),
    ("호러", "공포"),
    ("현대", "현대"),
];

#[derive(Deserialize)]
struct MappingDocument {
    mappings: Mappings,
    #[serde(default)]
    whitelist: Option<Vec<String>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Mappings {
    Pairs(Vec<(String, String)>),
    Table(BTreeMap<String, String>),
}

/// Ordered exact-match rules plus the whitelist of allowed standard genres.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreMapping {
    rules: Vec<(String, Genre)>,
    whitelist: HashSet<Genre>,
}
impl Default for GenreMapping {
    /// The built-in rule table, with every standard genre whitelisted.
    fn default() -> Self {
        Self::new(DEFAULT_RULES.iter().map(|(from, to)| (*from, to.parse().unwrap_or(Genre::Unclassified))), Genre::ALL)
    }
}
impl GenreMapping {
    pub fn new(
        rules: impl IntoIterator<Item = (impl Into<String>, Genre)>,
        whitelist: impl IntoIterator<Item = Genre>,
    ) -> Self {
        Self {
            rules: rules.into_iter().map(|(from, to)| (from.into().trim().to_string(), to)).collect(),
            whitelist: whitelist.into_iter().collect(),
        }
    }

    /// Loads rules from a JSON resource, falling back to the built-in table
    /// when the resource is missing or corrupt. Never fails.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::try_load(path.as_ref()) {
            Ok(mapping) => {
                tracing::debug!(rules = mapping.rules.len(), "loaded genre mapping");
                mapping
            },
            Err(e) => {
                tracing::warn!(error = %e.deref(), "falling back to built-in genre mapping");
                Self::default()
            },
        }
    }

    /// Loads rules from a JSON resource.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).or_raise(|| ErrorKind::MappingUnreadable(path.to_path_buf()))?;
        Self::from_json(&contents).or_raise(|| ErrorKind::MappingInvalid(path.to_path_buf()))
    }

    /// Parses a JSON rule document.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: MappingDocument =
            serde_json::from_str(json).or_raise(|| ErrorKind::ParseError { field: "mappings", value: json.to_string() })?;
        let pairs: Vec<(String, String)> = match document.mappings {
            Mappings::Pairs(pairs) => pairs,
            Mappings::Table(table) => table.into_iter().collect(),
        };
        let rules = pairs.into_iter().map(|(from, to)| {
            let genre = to.parse::<Genre>().unwrap_or_else(|_| {
                tracing::debug!(%from, %to, "mapping target is not a standard genre");
                Genre::Unclassified
            });
            (from, genre)
        });
        let whitelist: Vec<Genre> = match document.whitelist {
            Some(labels) => labels.iter().filter_map(|label| label.parse().ok()).collect(),
            None => Genre::ALL.to_vec(),
        };
        Ok(Self::new(rules, whitelist))
    }

    /// Maps a platform's genre string onto a standard genre.
    pub fn map_genre(&self, raw: &str) -> Genre {
        let raw = raw.trim();
        self.rules
            .iter()
            .find(|(from, _)| from == raw)
            .map(|(_, genre)| *genre)
            .filter(|genre| self.is_whitelisted(*genre))
            .unwrap_or(Genre::Unclassified)
    }

    /// Whitelist membership test for a genre label.
    pub fn is_valid_genre(&self, label: &str) -> bool {
        label.parse::<Genre>().is_ok_and(|genre| self.is_whitelisted(genre))
    }

    pub fn is_whitelisted(&self, genre: Genre) -> bool {
        self.whitelist.contains(&genre)
    }

    /// The platform genre strings that have a rule, in rule order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(from, _)| from.as_str())
    }
}
