use regex::Regex;
use std::sync::LazyLock;

/// Side-story words, longest alternatives first (the regex engine picks the
/// leftmost alternative that matches, not the longest).
const SIDE_STORY_WORDS: &str = "번외편|번외|番外|외전|에필로그|에필|후기|특별편|스핀오프";
const COMPLETION_WORDS: &str = "완결|完結|완|完";
const BRACKET_OPEN: &str = r"[\[\(]";
const BRACKET_CLOSE: &str = r"[\]\)]";

/// Suffixes typical of titles borrowed from classical Chinese ("-록", "-전기", ...).
pub(crate) const IDEOGRAPH_SUFFIXES: &[&str] = &[
    "기담", "전기", "열전", "비록", "야사", "연의", "지전", "기전", "행기", "유기", "몽기", "환기", "선기", "지", "록", "담",
];
/// Ordinary Korean words that happen to end in one of the [`IDEOGRAPH_SUFFIXES`].
pub(crate) const IDEOGRAPH_SUFFIX_EXCEPTIONS: &[&str] = &["역전기", "일기", "세기", "용기", "인기"];

/// Genre words recognised inside bracketed noise tags.
pub(crate) const GENRE_TAG_WORDS: &str =
    "판타지|무협|현판|퓨판|로판|겜판|SF|역사|선협|언정|공포|스포츠|소설|패러디|현대|미스터리";
const STATUS_TAG_WORDS: &str = "연재중|개정판|합본|특별판|단행본|미분류";
const PLATFORM_TAG_WORDS: &str = "임아소|네이버시리즈|카카오페이지|문피아|조아라|리디북스|노벨피아|AI번역|번역";

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Maturity rating "(19N)", "(19금)". Lifted verbatim, never cleaned away.
regex!(MATURITY_TAG, r"\(\s*19\s*\p{L}\s*\)");

// Author markers.
regex!(AUTHOR_HANDLE, r"(?:^|\s)[@ⓒ©]([^\s\]\)]+)");
regex!(AUTHOR_GLYPH, r"(?:^|\s)[@ⓒ©](?:\s|$)");
regex!(
    AUTHOR_EXPLICIT,
    r"(?i)[\[\(]?\s*(?:저자|작가|글|author|by)\s*[:：]\s*([^\s\]\)]+)\s*[\]\)]?"
);
regex!(SPACED_DASH, r"\s[-–—]\s");
regex!(AUTHOR_TRAILING, r"^(.+?)\s+[-–—]\s+([^-–—]+)$");
regex!(TWO_DIGITS, r"\d{2,}");

// Bracketed noise vocabulary.
regex!(GENRE_TAG, format!(r"(?i){BRACKET_OPEN}\s*({GENRE_TAG_WORDS})\s*{BRACKET_CLOSE}").as_str());
regex!(
    NOISE_TAG,
    format!(
        r"(?i){BRACKET_OPEN}\s*(?:{STATUS_TAG_WORDS}|{PLATFORM_TAG_WORDS})\s*{BRACKET_CLOSE}|\[\s*19\s*[N금]\s*\]|{BRACKET_OPEN}\s*(?:15금|성인)\s*{BRACKET_CLOSE}"
    )
    .as_str()
);
regex!(TRANSLATION_CREDIT, r"(?:번역|역자)\s*[:：]\s*[^\s\]\)]+");
regex!(EMPTY_BRACKETS, r"[\[\(]\s*[\]\)]");

// Connector words. Matched with their surrounding whitespace so that only
// whole tokens go; glued forms next to side-story words are handled apart.
regex!(CONNECTOR, r"(?i)(?:^|\s)(?:및|포함|본편|&|included|incl\.)(?:\s|$)");
regex!(CONNECTOR_GLUED_SUFFIX, format!(r"({SIDE_STORY_WORDS})포함").as_str());
regex!(CONNECTOR_GLUED_INFIX, format!(r"({SIDE_STORY_WORDS})\s*(?:및|&)\s*({SIDE_STORY_WORDS})").as_str());

// Anchor triggers.
regex!(TRIGGER_UNIT, r"\s\d+\s*[화권부편회장](?:$|[^\p{L}\p{N}])");
regex!(TRIGGER_RANGE, r"\s\d+\s*[-~]\s*\d+");
regex!(
    TRIGGER_COMPLETION,
    format!(r"(?i){BRACKET_OPEN}\s*(?:{COMPLETION_WORDS}|complete|end|fin)\s*{BRACKET_CLOSE}|\s(?:完結|完|완결)(?:$|\s)").as_str()
);
regex!(
    TRIGGER_COMPLETION_COMPOUND,
    format!(r"(?:\s{BRACKET_OPEN}?|{BRACKET_OPEN})\s*(?:{COMPLETION_WORDS})\s*\+\s*(?:{SIDE_STORY_WORDS})").as_str()
);
regex!(TRIGGER_SIDE_STORY, format!(r"\s\+?\s*(?:{SIDE_STORY_WORDS})(?:$|[^\p{{L}}])").as_str());
regex!(TRIGGER_SEPARATOR, r"\s[+|]");
regex!(TRIGGER_TRAILING_NUMBER, r"\s\d+\s*(?:完結|完|완|\(\s*完\s*\)|\(\s*완\s*\))?\s*$");

// Residual fields.
regex!(VOLUME, r"(\d+)(?:\s*[-~]\s*(\d+))?\s*([부권])");
regex!(RANGE, r"(\d+)\s*[-~]\s*(\d+)\s*[화회장편]?");
regex!(BARE_COUNT, r"(?:^|\s)(\d{2,})\s*[화회장편]?(?:$|\s)");
regex!(
    COMPLETION_COMPOUND,
    format!(r"{BRACKET_OPEN}?\s*(?:{COMPLETION_WORDS})\s*\+\s*({SIDE_STORY_WORDS})\s*{BRACKET_CLOSE}?").as_str()
);
regex!(
    COMPLETION,
    format!(r"(?i){BRACKET_OPEN}\s*(?:{COMPLETION_WORDS}|complete|end|fin)\s*{BRACKET_CLOSE}").as_str()
);
regex!(COMPLETION_BARE, format!(r"(?:^|[\s\d])({COMPLETION_WORDS})(?:$|[\s\(\[\+])").as_str());
regex!(
    SIDE_STORY,
    format!(r"\+?\s*({SIDE_STORY_WORDS})(?:\s*(\d+)(?:\s*[-~]\s*(\d+))?(?:\s*(?:([부권])|[화편회]))?)?").as_str()
);
regex!(SIDE_STORY_SUFFIX, format!(r"(?:{SIDE_STORY_WORDS})\s*$").as_str());
