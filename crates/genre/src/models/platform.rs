use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use super::sanitize;
use crate::error::{Error, ErrorKind};

/// Web-novel platforms whose genre reports can be arbitrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Ridibooks,
    Munpia,
    NaverSeries,
    KakaoPage,
    Novelnet,
    Novelpia,
    Joara,
    WebtoonGuide,
    MrBlue,
    Kyobo,
    Yes24,
    Aladin,
}
impl Platform {
    /// Default arbitration order, most trusted first.
    pub const DEFAULT_PRIORITY: [Platform; 12] = [
        Platform::Ridibooks,
        Platform::Munpia,
        Platform::NaverSeries,
        Platform::KakaoPage,
        Platform::Novelnet,
        Platform::Novelpia,
        Platform::Joara,
        Platform::WebtoonGuide,
        Platform::MrBlue,
        Platform::Kyobo,
        Platform::Yes24,
        Platform::Aladin,
    ];

    /// Returns the stable identifier used in configuration and cache records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ridibooks => "ridibooks",
            Platform::Munpia => "munpia",
            Platform::NaverSeries => "naver_series",
            Platform::KakaoPage => "kakao_page",
            Platform::Novelnet => "novelnet",
            Platform::Novelpia => "novelpia",
            Platform::Joara => "joara",
            Platform::WebtoonGuide => "webtoon_guide",
            Platform::MrBlue => "mr_blue",
            Platform::Kyobo => "kyobo",
            Platform::Yes24 => "yes24",
            Platform::Aladin => "aladin",
        }
    }

    /// Returns the name the platform goes by.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Ridibooks => "리디북스",
            Platform::Munpia => "문피아",
            Platform::NaverSeries => "네이버시리즈",
            Platform::KakaoPage => "카카오페이지",
            Platform::Novelnet => "소설넷",
            Platform::Novelpia => "노벨피아",
            Platform::Joara => "조아라",
            Platform::WebtoonGuide => "웹툰가이드",
            Platform::MrBlue => "미스터블루",
            Platform::Kyobo => "교보문고",
            Platform::Yes24 => "YES24",
            Platform::Aladin => "알라딘",
        }
    }
}
impl FromStr for Platform {
    type Err = Error;
    /// Accepts either the identifier or the display name, ignoring case,
    /// spaces, dashes and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sanitized = sanitize(s);
        Platform::DEFAULT_PRIORITY
            .into_iter()
            .find(|p| sanitize(p.as_str()) == sanitized || sanitize(p.display_name()) == sanitized)
            .ok_or_else(|| Error::from(ErrorKind::ParseError { field: "platform", value: s.to_string() }))
    }
}
impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ridibooks", Platform::Ridibooks)]
    #[case("리디북스", Platform::Ridibooks)]
    #[case("Naver Series", Platform::NaverSeries)]
    #[case("naver_series", Platform::NaverSeries)]
    #[case("네이버 시리즈", Platform::NaverSeries)]
    #[case("YES24", Platform::Yes24)]
    #[case("mr-blue", Platform::MrBlue)]
    fn test_parse(#[case] input: &str, #[case] expected: Platform) {
        assert_eq!(input.parse::<Platform>().unwrap(), expected);
    }

    #[test]
    fn unknown_platform_is_an_error() {
        assert!("geocities".parse::<Platform>().is_err());
    }

    #[test]
    fn serde_uses_identifier() {
        for platform in Platform::DEFAULT_PRIORITY {
            assert_eq!(serde_json::to_string(&platform).unwrap(), format!("\"{}\"", platform.as_str()));
        }
    }
}
