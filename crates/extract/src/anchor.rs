//! Anchor boundary detection.
//!
//! The title anchor is everything before the first metadata trigger in a
//! cleaned name; the residual is everything from the trigger onward.

use crate::consts::{
    IDEOGRAPH_SUFFIX_EXCEPTIONS, IDEOGRAPH_SUFFIXES, TRIGGER_COMPLETION, TRIGGER_COMPLETION_COMPOUND, TRIGGER_RANGE,
    TRIGGER_SEPARATOR, TRIGGER_SIDE_STORY, TRIGGER_TRAILING_NUMBER, TRIGGER_UNIT,
};

/// Byte offset of the earliest metadata trigger in `s`, if any.
pub(crate) fn find_trigger(s: &str) -> Option<usize> {
    let mut earliest = [
        &*TRIGGER_UNIT,
        &*TRIGGER_RANGE,
        &*TRIGGER_COMPLETION,
        &*TRIGGER_COMPLETION_COMPOUND,
        &*TRIGGER_SIDE_STORY,
        &*TRIGGER_SEPARATOR,
    ]
    .into_iter()
    .filter_map(|re| re.find(s).map(|m| m.start()))
    .min();
    // A bare trailing number only counts when it does not finish a title
    // such as "삼국지 3".
    if let Some(m) = TRIGGER_TRAILING_NUMBER.find(s)
        && !has_ideograph_suffix(&s[..m.start()])
    {
        earliest = Some(earliest.map_or(m.start(), |e| e.min(m.start())));
    }
    earliest
}

/// Splits a cleaned name into `(title, residual)`.
///
/// With no trigger the whole string is the title and the residual is empty.
pub fn split_anchor(cleaned: &str) -> (String, String) {
    match find_trigger(cleaned) {
        Some(pos) => (trim_title(&cleaned[..pos]).to_string(), cleaned[pos..].trim().to_string()),
        None => (trim_title(cleaned).to_string(), String::new()),
    }
}

fn trim_title(s: &str) -> &str {
    s.trim().trim_end_matches(|c: char| matches!(c, '.' | '-' | '_' | ',' | '~') || c.is_whitespace())
}

fn has_ideograph_suffix(candidate: &str) -> bool {
    let candidate = trim_title(candidate);
    !IDEOGRAPH_SUFFIX_EXCEPTIONS.iter().any(|word| candidate.ends_with(word))
        && IDEOGRAPH_SUFFIXES.iter().any(|suffix| candidate.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("전지적 독자 시점 1-551 (완)", "전지적 독자 시점", "1-551 (완)")]
    #[case("나 혼자만 레벨업 001-270 完 + 외전", "나 혼자만 레벨업", "001-270 完 + 외전")]
    #[case("경성 1920 2부 (완)", "경성 1920", "2부 (완)")]
    #[case("회귀자의 삶 253", "회귀자의 삶", "253")]
    #[case("제목(완)", "제목", "(완)")]
    #[case("제목 외전", "제목", "외전")]
    #[case("제목 | 부제", "제목", "| 부제")]
    #[case("제목 - 1-100", "제목", "1-100")]
    #[case("그냥 제목", "그냥 제목", "")]
    #[case("외전의 기사", "외전의 기사", "")]
    #[case("(완) 제목", "", "(완) 제목")]
    #[case("화산귀환 (완결+외전)", "화산귀환", "(완결+외전)")]
    #[case("화산귀환 완+외전", "화산귀환", "완+외전")]
    #[case("화산귀환 完+에필로그", "화산귀환", "完+에필로그")]
    #[case("화산귀환(완+외전)", "화산귀환", "(완+외전)")]
    #[case("제목 1~100 完結", "제목", "1~100 完結")]
    #[case("제목 完結", "제목", "完結")]
    fn test_split_anchor(#[case] input: &str, #[case] title: &str, #[case] residual: &str) {
        assert_eq!(split_anchor(input), (title.to_string(), residual.to_string()));
    }

    #[rstest]
    #[case("삼국지 3", "삼국지 3", "")]
    #[case("영웅전기 12", "영웅전기 12", "")]
    #[case("무한 역전기 12", "무한 역전기", "12")]
    #[case("영웅전기 12화", "영웅전기", "12화")]
    fn ideograph_suffix_exempts_bare_trailing_number(#[case] input: &str, #[case] title: &str, #[case] residual: &str) {
        assert_eq!(split_anchor(input), (title.to_string(), residual.to_string()));
    }
}
