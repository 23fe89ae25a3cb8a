use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::error::{Error, ErrorKind};

/// Standard genre labels.
///
/// The closed set of labels a classification may end in. Labels are the
/// short Korean forms used in normalized filenames (`[현판] ...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    #[serde(rename = "현판")]
    ModernFantasy,
    #[serde(rename = "퓨판")]
    FusionFantasy,
    #[serde(rename = "무협")]
    Wuxia,
    #[serde(rename = "로판")]
    RomanceFantasy,
    #[serde(rename = "겜판")]
    GameFantasy,
    #[serde(rename = "판타지")]
    Fantasy,
    #[serde(rename = "SF")]
    ScienceFiction,
    #[serde(rename = "역사")]
    History,
    #[serde(rename = "선협")]
    Xianxia,
    #[serde(rename = "언정")]
    Romance,
    #[serde(rename = "스포츠")]
    Sports,
    #[serde(rename = "소설")]
    Novel,
    #[serde(rename = "패러디")]
    Parody,
    #[serde(rename = "공포")]
    Horror,
    #[serde(rename = "현대")]
    Modern,
    /// Nothing matched.
    #[serde(rename = "미분류")]
    Unclassified,
}
impl Genre {
    /// Every genre, in whitelist order.
    pub const ALL: [Genre; 16] = [
        Genre::ModernFantasy,
        Genre::FusionFantasy,
        Genre::Wuxia,
        Genre::RomanceFantasy,
        Genre::GameFantasy,
        Genre::Fantasy,
        Genre::ScienceFiction,
        Genre::History,
        Genre::Xianxia,
        Genre::Romance,
        Genre::Sports,
        Genre::Novel,
        Genre::Parody,
        Genre::Horror,
        Genre::Modern,
        Genre::Unclassified,
    ];

    /// Returns the label used in filenames and persisted records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::ModernFantasy => "현판",
            Genre::FusionFantasy => "퓨판",
            Genre::Wuxia => "무협",
            Genre::RomanceFantasy => "로판",
            Genre::GameFantasy => "겜판",
            Genre::Fantasy => "판타지",
            Genre::ScienceFiction => "SF",
            Genre::History => "역사",
            Genre::Xianxia => "선협",
            Genre::Romance => "언정",
            Genre::Sports => "스포츠",
            Genre::Novel => "소설",
            Genre::Parody => "패러디",
            Genre::Horror => "공포",
            Genre::Modern => "현대",
            Genre::Unclassified => "미분류",
        }
    }

    /// How narrow the genre is. A sub-genre outranks its parent when one
    /// platform reports both.
    pub fn specificity(&self) -> u8 {
        match self {
            Genre::Unclassified => 0,
            Genre::Novel => 1,
            Genre::Fantasy => 2,
            Genre::History | Genre::Sports => 4,
            _ => 3,
        }
    }

    pub fn is_classified(&self) -> bool {
        *self != Genre::Unclassified
    }
}
impl FromStr for Genre {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("sf") {
            return Ok(Genre::ScienceFiction);
        }
        if trimmed.eq_ignore_ascii_case("unclassified") {
            return Ok(Genre::Unclassified);
        }
        match Genre::ALL.into_iter().find(|genre| genre.as_str() == trimmed) {
            Some(genre) => Ok(genre),
            None => exn::bail!(ErrorKind::ParseError { field: "genre", value: s.to_string() }),
        }
    }
}
impl Display for Genre {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("현판", Genre::ModernFantasy)]
    #[case(" 무협 ", Genre::Wuxia)]
    #[case("sf", Genre::ScienceFiction)]
    #[case("미분류", Genre::Unclassified)]
    #[case("unclassified", Genre::Unclassified)]
    fn test_parse(#[case] input: &str, #[case] expected: Genre) {
        assert_eq!(input.parse::<Genre>().unwrap(), expected);
    }

    #[test]
    fn unknown_label_is_an_error() {
        assert!("로맨스 판타지".parse::<Genre>().is_err());
    }

    #[test]
    fn labels_round_trip() {
        for genre in Genre::ALL {
            assert_eq!(genre.as_str().parse::<Genre>().unwrap(), genre);
            assert_eq!(serde_json::to_string(&genre).unwrap(), format!("\"{}\"", genre.as_str()));
        }
    }

    #[test]
    fn narrower_genres_are_more_specific() {
        assert!(Genre::ModernFantasy.specificity() > Genre::Fantasy.specificity());
        assert!(Genre::Fantasy.specificity() > Genre::Novel.specificity());
        assert!(Genre::Novel.specificity() > Genre::Unclassified.specificity());
    }
}
