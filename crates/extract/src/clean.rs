//! Cleanup stages run on a filename stem before the title anchor is located.
//!
//! The stages run in a fixed order (maturity tags, authors, noise tags,
//! connectors) and every stage is idempotent: running it a second time on
//! its own output changes nothing. Each stage also collapses whitespace runs.

use regex::Regex;
use tracing::instrument;

use crate::anchor::find_trigger;
use crate::consts::{
    AUTHOR_EXPLICIT, AUTHOR_GLYPH, AUTHOR_HANDLE, AUTHOR_TRAILING, CONNECTOR, CONNECTOR_GLUED_INFIX, CONNECTOR_GLUED_SUFFIX,
    EMPTY_BRACKETS, GENRE_TAG, MATURITY_TAG, NOISE_TAG, SIDE_STORY, SPACED_DASH, TRANSLATION_CREDIT, TWO_DIGITS,
};

/// Output of the full cleanup pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cleaned {
    pub text: String,
    pub author: Option<String>,
    pub tagged_genre: Option<String>,
    /// Maturity-rating tags, verbatim.
    pub annotations: Vec<String>,
}

/// Runs every cleanup stage, in order, over a filename stem (no extension).
#[instrument(level = "trace")]
pub fn clean(stem: &str) -> Cleaned {
    let (text, annotations) = lift_maturity_tags(stem);
    let (text, author) = strip_authors(&text);
    let (text, tagged_genre) = strip_noise_tags(&text);
    let text = strip_connectors(&text);
    Cleaned { text, author, tagged_genre, annotations }
}

/// Splits a trailing file extension (with its leading dot) off a name.
///
/// The extension must be 1 to 10 ASCII alphanumerics with at least one letter,
/// so that decimal numbers such as `"v1.5"` are not mistaken for extensions.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => {
            let ext = &name[idx + 1..];
            let valid = (1..=10).contains(&ext.len())
                && ext.chars().all(|c| c.is_ascii_alphanumeric())
                && ext.chars().any(|c| c.is_ascii_alphabetic());
            if valid { (&name[..idx], &name[idx..]) } else { (name, "") }
        },
        _ => (name, ""),
    }
}

/// Collapses every run of (Unicode) whitespace into a single ASCII space and
/// trims both ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lifts maturity-rating tags such as `(19N)` out of the text, verbatim.
pub fn lift_maturity_tags(s: &str) -> (String, Vec<String>) {
    let mut tags = Vec::new();
    let mut current = s.to_string();
    while let Some((range, tag)) = MATURITY_TAG.find(&current).map(|m| (m.range(), m.as_str().to_string())) {
        tags.push(tag);
        current.replace_range(range, " ");
    }
    (collapse_whitespace(&current), tags)
}

/// Removes author markers, returning the first captured author name.
///
/// Handles `@name`, `ⓒname`, `©name`, explicit `작가: name`-style forms and,
/// as a last resort, a trailing `Title - Author`.
pub fn strip_authors(s: &str) -> (String, Option<String>) {
    let mut author: Option<String> = None;
    let mut current = s.to_string();
    for re in [&*AUTHOR_HANDLE, &*AUTHOR_EXPLICIT] {
        while let Some((range, name)) =
            re.captures(&current).map(|caps| (caps.get_match().range(), caps.get(1).map(|m| m.as_str().to_string())))
        {
            if author.is_none() {
                author = name;
            }
            current.replace_range(range, " ");
        }
    }
    let mut current = collapse_whitespace(&remove_all(&AUTHOR_GLYPH, &current));
    if let Some((title, name)) = trailing_author(&current) {
        author.get_or_insert(name);
        current = title;
    }
    (current, author)
}

/// Recognises `Title - Author` when the string holds exactly one spaced dash
/// and the right-hand side looks like a short name rather than metadata.
fn trailing_author(s: &str) -> Option<(String, String)> {
    if SPACED_DASH.find_iter(s).count() != 1 {
        return None;
    }
    let caps = AUTHOR_TRAILING.captures(s)?;
    let title = caps.get(1)?.as_str().trim();
    let name = caps.get(2)?.as_str().trim();
    let plausible = !title.is_empty()
        && !name.is_empty()
        && name.chars().count() < 20
        && !TWO_DIGITS.is_match(name)
        && !name.contains(['(', ')', '[', ']', '+', '|'])
        && !SIDE_STORY.is_match(name)
        && find_trigger(&format!(" {name}")).is_none();
    plausible.then(|| (title.to_string(), name.to_string()))
}

/// Removes bracketed noise tags (genre, status, adult, platform and
/// translation credits), returning the first genre tag that was removed.
pub fn strip_noise_tags(s: &str) -> (String, Option<String>) {
    let tagged_genre = GENRE_TAG.captures(s).and_then(|caps| caps.get(1)).map(|m| m.as_str().to_uppercase());
    let mut current = collapse_whitespace(s);
    loop {
        let next = [&*GENRE_TAG, &*NOISE_TAG, &*TRANSLATION_CREDIT, &*EMPTY_BRACKETS]
            .into_iter()
            .fold(current.clone(), |acc, re| re.replace_all(&acc, " ").into_owned());
        let next = collapse_whitespace(&next);
        if next == current {
            break;
        }
        current = next;
    }
    (current, tagged_genre)
}

/// Removes connector words (`및`, `포함`, `본편`, `&`, `included`, `incl.`)
/// so that they can never mask an adjacent metadata marker.
pub fn strip_connectors(s: &str) -> String {
    let mut current = collapse_whitespace(s);
    loop {
        let next = CONNECTOR_GLUED_INFIX.replace_all(&current, "$1 $2").into_owned();
        let next = CONNECTOR_GLUED_SUFFIX.replace_all(&next, "$1").into_owned();
        let next = remove_all(&CONNECTOR, &next);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Replaces matches of `re` with a space until none remain.
fn remove_all(re: &Regex, s: &str) -> String {
    let mut current = s.to_string();
    while re.is_match(&current) {
        current = re.replace_all(&current, " ").into_owned();
    }
    collapse_whitespace(&current)
}
