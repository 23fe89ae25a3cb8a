//! Residual parsing: turns the metadata tail of a filename into structured fields.
//!
//! Fields are consumed in a fixed precedence (volume and range, completion,
//! side stories, bare chapter count) and every consumed token is removed from
//! the working string, so no token is attributed twice. Whatever is left over
//! becomes a single annotation.

use regex::{Captures, Regex};
use tracing::instrument;

use crate::clean::{collapse_whitespace, lift_maturity_tags, strip_connectors};
use crate::consts::{
    BARE_COUNT, COMPLETION, COMPLETION_BARE, COMPLETION_COMPOUND, EMPTY_BRACKETS, RANGE, SIDE_STORY, SIDE_STORY_SUFFIX,
    VOLUME,
};
use crate::models::ResidualInfo;

/// Punctuation that may surround metadata but carries none itself.
const SEPARATORS: &[char] = &['+', '-', '~', ',', '.', '_', '|', '/', ':'];

/// Parses a residual string.
///
/// Connector stripping runs first, so calling this directly on an
/// unstripped residual gives the same answer as going through
/// [`extract`](crate::extract).
#[instrument(level = "trace")]
pub fn parse_residual(residual: &str) -> ResidualInfo {
    let (mut rest, mut annotations) = lift_maturity_tags(&strip_connectors(residual));
    let volume_info = take_volume(&mut rest);
    let mut range_info = take_range(&mut rest);
    let is_completed = take_completion(&mut rest);
    let side_story_tags = take_side_stories(&mut rest);
    if range_info.is_empty() {
        range_info = take_bare_count(&mut rest);
    }
    annotations.extend(leftover(&rest));
    ResidualInfo { volume_info, range_info, is_completed, side_story_tags, annotations }
}

/// Drops leading zeros, keeping a lone `"0"`.
fn strip_zeros(n: &str) -> &str {
    match n.trim_start_matches('0') {
        "" => "0",
        stripped => stripped,
    }
}

/// First match of `re` that is not a count attached to a side-story marker.
fn find_unattached<'a>(re: &Regex, text: &'a str) -> Option<Captures<'a>> {
    re.captures_iter(text).find(|caps| !SIDE_STORY_SUFFIX.is_match(&text[..caps.get_match().start()]))
}

fn take_volume(rest: &mut String) -> String {
    let Some((range, info)) = find_unattached(&VOLUME, rest).map(|caps| {
        let unit = &caps[3];
        let info = match caps.get(2) {
            Some(end) => format!("{}-{}{unit}", strip_zeros(&caps[1]), strip_zeros(end.as_str())),
            None => format!("{}{unit}", strip_zeros(&caps[1])),
        };
        (caps.get_match().range(), info)
    }) else {
        return String::new();
    };
    rest.replace_range(range, " ");
    info
}

fn take_range(rest: &mut String) -> String {
    let Some((range, info)) = find_unattached(&RANGE, rest)
        .map(|caps| (caps.get_match().range(), format!("{}-{}", strip_zeros(&caps[1]), strip_zeros(&caps[2]))))
    else {
        return String::new();
    };
    rest.replace_range(range, " ");
    info
}

/// A lone number of two or more digits is read as a single-file dump of
/// that many chapters.
fn take_bare_count(rest: &mut String) -> String {
    let Some((range, info)) =
        find_unattached(&BARE_COUNT, rest).map(|caps| (caps.get_match().range(), format!("1-{}", strip_zeros(&caps[1]))))
    else {
        return String::new();
    };
    rest.replace_range(range, " ");
    info
}

fn take_completion(rest: &mut String) -> bool {
    let mut completed = false;
    // "완+외전": the completion half is consumed here, the side-story word is
    // left in place for the side-story pass (along with any count after it).
    while let Some((range, side)) =
        COMPLETION_COMPOUND.captures(rest).map(|caps| (caps.get_match().range(), caps[1].to_string()))
    {
        completed = true;
        rest.replace_range(range, &format!(" {side} "));
    }
    while let Some(range) = COMPLETION.find(rest).map(|m| m.range()) {
        completed = true;
        rest.replace_range(range, " ");
    }
    while let Some(range) = COMPLETION_BARE.captures(rest).and_then(|caps| caps.get(1)).map(|m| m.range()) {
        completed = true;
        rest.replace_range(range, " ");
    }
    completed
}

fn take_side_stories(rest: &mut String) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    while let Some((range, tag)) = SIDE_STORY.captures(rest).map(|caps| (caps.get_match().range(), side_story_tag(&caps)))
    {
        rest.replace_range(range, " ");
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

fn side_story_tag(caps: &Captures<'_>) -> String {
    let mut tag = normalize_side_story(&caps[1]).to_string();
    if let Some(start) = caps.get(2) {
        tag.push(' ');
        tag.push_str(strip_zeros(start.as_str()));
        if let Some(end) = caps.get(3) {
            tag.push('-');
            tag.push_str(strip_zeros(end.as_str()));
        }
        if let Some(unit) = caps.get(4) {
            tag.push_str(unit.as_str());
        }
    }
    tag
}

/// Folds side-story synonyms onto their canonical spelling.
pub fn normalize_side_story(marker: &str) -> &str {
    match marker {
        "番外" | "번외" | "번외편" => "외전",
        "에필로그" => "에필",
        other => other,
    }
}

fn leftover(rest: &str) -> Option<String> {
    let mut text = collapse_whitespace(rest);
    loop {
        let next = collapse_whitespace(&EMPTY_BRACKETS.replace_all(&text, " "));
        let next = next.trim_matches(|c: char| SEPARATORS.contains(&c) || c.is_whitespace()).to_string();
        if next == text {
            break;
        }
        text = next;
    }
    (!text.is_empty()).then_some(text)
}
