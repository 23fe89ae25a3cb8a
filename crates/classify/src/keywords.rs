//! Local keyword fallback.
//!
//! A ruleset is an ordered list of genres, each with weighted single keywords
//! and weighted keyword pairs. A title scores the sum of the weights of every
//! keyword it contains (case-insensitive substring match) plus every pair whose
//! two keywords both occur. The best scoring genre wins when it reaches the
//! ruleset's minimum score; ties go to the genre listed first.
//!
//! ```json
//! {
//!     "min_score": 8,
//!     "rules": [
//!         {"genre": "무협", "keywords": {"천마": 10, "무림": 10}, "compounds": [["화산", "귀환", 22]]}
//!     ]
//! }
//! ```

use exn::ResultExt;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Deref;
use std::path::Path;
use tracing::instrument;

use crate::error::{ErrorKind, Result};

pub const DEFAULT_MIN_SCORE: u32 = 8;

type Keywords = &'static [(&'static str, u32)];
type Compounds = &'static [(&'static str, &'static str, u32)];

const DEFAULT_RULES: &[(&str, Keywords, Compounds)] = &[
    (
        "무협",
        &[
            ("천마", 10),
            ("무림", 10),
            ("강호", 10),
            ("검황", 10),
            ("검성", 10),
            ("무공", 9),
            ("검법", 8),
            ("내공", 8),
            ("마교", 8),
            ("화산", 10),
            ("무당", 10),
            ("소림", 9),
            ("곤륜", 9),
            ("개방", 9),
            ("남궁", 10),
            ("제갈", 10),
            ("사천당", 9),
            ("모용", 9),
        ],
        &[
            ("무공", "시스템", 22),
            ("무공", "레벨업", 22),
            ("무림", "회귀", 20),
            ("무림", "귀환", 20),
            ("천마", "제자", 22),
            ("남궁", "세가", 22),
            ("제갈", "세가", 22),
            ("화산", "귀환", 22),
            ("화산", "회귀", 22),
        ],
    ),
    (
        "현판",
        &[
            ("헌터", 10),
            ("게이트", 10),
            ("각성", 9),
            ("아이돌", 10),
            ("재벌", 10),
            ("연예계", 10),
            ("작곡가", 10),
            ("배우", 9),
            ("검사", 8),
            ("의사", 8),
            ("변호사", 9),
            ("대표", 10),
            ("현대", 9),
            ("편의점", 9),
        ],
        &[
            ("헌터", "게이트", 22),
            ("헌터", "협회", 22),
            ("각성", "헌터", 20),
            ("아이돌", "회귀", 22),
            ("작곡가", "회귀", 22),
            ("재벌", "회귀", 20),
            ("배우", "회귀", 22),
        ],
    ),
    (
        "로판",
        &[
            ("악녀", 10),
            ("총애", 10),
            ("집착", 9),
            ("계약결혼", 10),
            ("정략결혼", 10),
            ("황후", 10),
            ("황태자", 9),
            ("공작", 9),
            ("후궁", 10),
            ("영애", 9),
            ("오메가버스", 10),
        ],
        &[("악녀", "황제", 22), ("총애", "황후", 22), ("계약", "결혼", 22)],
    ),
    (
        "겜판",
        &[
            ("망겜", 10),
            ("갓겜", 10),
            ("vr", 10),
            ("mmorpg", 10),
            ("npc", 9),
            ("플레이어", 7),
            ("게이머", 7),
            ("접속", 8),
            ("탱커", 9),
        ],
        &[("vr", "게임", 22), ("npc", "플레이어", 20), ("망겜", "속", 22), ("탱커", "힐러", 22)],
    ),
    (
        "퓨판",
        &[
            ("귀환", 10),
            ("회귀", 10),
            ("환생", 9),
            ("빙의", 9),
            ("혼자만", 9),
            ("독식", 9),
            ("레벨업", 7),
            ("상태창", 8),
            ("이세계", 9),
            ("아포칼립스", 9),
            ("좀비", 9),
            ("소드마스터", 9),
        ],
        &[
            ("나 혼자", "레벨업", 18),
            ("소드", "마스터", 18),
            ("이세계", "전이", 18),
            ("편의점", "종말", 20),
        ],
    ),
    (
        "판타지",
        &[
            ("마법사", 9),
            ("대마법사", 10),
            ("마탑", 9),
            ("드래곤", 9),
            ("마왕", 7),
            ("성기사", 8),
            ("네크로맨서", 10),
            ("용사", 8),
        ],
        &[],
    ),
    (
        "역사",
        &[
            ("조선", 10),
            ("고려", 10),
            ("삼국지", 10),
            ("세자", 8),
            ("대군", 8),
            ("이순신", 10),
            ("세계대전", 10),
            ("나폴레옹", 10),
        ],
        &[],
    ),
    ("선협", &[("선인", 10), ("도술", 9), ("법술", 9), ("단약", 8), ("승천", 9), ("선계", 10)], &[]),
    ("SF", &[("우주", 10), ("외계인", 10), ("로봇", 9), ("인공지능", 9), ("우주선", 9)], &[]),
    (
        "스포츠",
        &[("축구", 10), ("야구", 10), ("농구", 10), ("투수", 9), ("월드컵", 10), ("메이저리그", 10), ("국가대표", 9)],
        &[],
    ),
];

/// Finds a raw genre string for a title from local knowledge alone.
pub trait KeywordMatcher: Send + Sync {
    /// The winning genre string, if any; mapped through the genre mapping by the caller.
    fn best_match(&self, title: &str) -> Option<String>;
}

/// One genre's keywords and keyword pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub genre: String,
    #[serde(default)]
    pub keywords: BTreeMap<String, u32>,
    #[serde(default)]
    pub compounds: Vec<(String, String, u32)>,
}
impl KeywordRule {
    /// Total weight of everything in this rule that `haystack` contains.
    /// `haystack` must already be lower-cased.
    fn score(&self, haystack: &str) -> u32 {
        let contains = |keyword: &str| !keyword.is_empty() && haystack.contains(&keyword.to_lowercase());
        let singles: u32 = self.keywords.iter().filter(|(k, _)| contains(k)).map(|(_, w)| *w).sum();
        let pairs: u32 = self.compounds.iter().filter(|(a, b, _)| contains(a) && contains(b)).map(|(_, _, w)| *w).sum();
        singles + pairs
    }
}

/// A weighted keyword ruleset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRules {
    #[serde(default = "default_min_score")]
    pub min_score: u32,
    pub rules: Vec<KeywordRule>,
}
impl Default for KeywordRules {
    /// The built-in ruleset.
    fn default() -> Self {
        let rules = DEFAULT_RULES
            .iter()
            .map(|(genre, keywords, compounds)| KeywordRule {
                genre: genre.to_string(),
                keywords: keywords.iter().map(|(k, w)| (k.to_string(), *w)).collect(),
                compounds: compounds.iter().map(|(a, b, w)| (a.to_string(), b.to_string(), *w)).collect(),
            })
            .collect();
        Self { min_score: DEFAULT_MIN_SCORE, rules }
    }
}
impl KeywordRules {
    /// Loads a ruleset from a JSON resource, falling back to the built-in
    /// one when the resource is missing or corrupt. Never fails.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::try_load(path.as_ref()) {
            Ok(rules) => {
                tracing::debug!(genres = rules.rules.len(), "loaded keyword rules");
                rules
            },
            Err(e) => {
                tracing::warn!(error = %e.deref(), "falling back to built-in keyword rules");
                Self::default()
            },
        }
    }

    pub fn try_load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).or_raise(|| ErrorKind::KeywordsUnreadable(path.to_path_buf()))?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).or_raise(|| ErrorKind::KeywordsInvalid)
    }

    /// Every genre's score for `title`, in ruleset order.
    pub fn scores(&self, title: &str) -> Vec<(&str, u32)> {
        let haystack = title.to_lowercase();
        self.rules.iter().map(|rule| (rule.genre.as_str(), rule.score(&haystack))).collect()
    }
}
impl KeywordMatcher for KeywordRules {
    fn best_match(&self, title: &str) -> Option<String> {
        let mut best: Option<(&str, u32)> = None;
        for (genre, score) in self.scores(title) {
            if score >= self.min_score && best.is_none_or(|(_, top)| score > top) {
                best = Some((genre, score));
            }
        }
        tracing::trace!(title, best = ?best, "keyword scores");
        best.map(|(genre, _)| genre.to_string())
    }
}

fn default_min_score() -> u32 {
    DEFAULT_MIN_SCORE
}
