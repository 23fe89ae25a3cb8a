//! Normalized filename templating.
//!
//! Turns a parse result and a genre into the canonical filename using an
//! [upon] template. The template renders the name without its extension;
//! whitespace in the output is normalized and the extension appended after.
//!
//! # Template Variables
//!
//! | Variable        | Type                   | Description                                  |
//! |-----------------|------------------------|----------------------------------------------|
//! | `genre`         | `Option<String>`       | Genre label, unset when unclassified          |
//! | `title`         | `String`               | Title anchor                                  |
//! | `author`        | `Option<String>`       | Author, when one was found                    |
//! | `volume`        | `String`               | Volume info (`1-3권`), may be empty           |
//! | `range`         | `String`               | Range info (`1-270`), may be empty            |
//! | `completed`     | `bool`                 | Completion flag                               |
//! | `side_stories`  | `Option<List<String>>` | Side-story tags, unset when there are none    |
//! | `annotations`   | `List<String>`         | Maturity tags and unattributed leftovers      |
//!
//! Lists render through the `join` formatter (`{{ side_stories|join }}` gives
//! `외전, 에필`).
//!
//! # Example
//!
//! ```
//! use shelf_genre::models::Genre;
//! use shelf_library::NameGenerator;
//!
//! let parse = shelf_extract::extract("나 혼자만 레벨업 001-270 完 + 외전.txt");
//! let generator: NameGenerator = shelf_library::DEFAULT_TEMPLATE.parse().unwrap();
//! let name = generator.generate(&parse, Genre::ModernFantasy).unwrap();
//! assert_eq!(name, "[현판] 나 혼자만 레벨업 1-270 (완) + 외전.txt");
//! ```

use crate::error::{Error, ErrorKind, Result};
use exn::ResultExt;
use shelf_extract::clean::collapse_whitespace;
use shelf_extract::models::TitleParseResult;
use shelf_genre::models::Genre;
use std::str::FromStr;
use tracing::instrument;
use upon::{Engine, Template};

/// `[genre] title volume range annotations (완) + side, stories`
pub const DEFAULT_TEMPLATE: &str = concat!(
    "{% if genre %}[{{ genre }}] {% endif %}",
    "{{ title }} {{ volume }} {{ range }} {{ annotations|join }}",
    "{% if completed %} (완){% endif %}",
    "{% if side_stories %} + {{ side_stories|join }}{% endif %}",
);

/// Builds canonical filenames from a user-defined (or the default) template.
///
/// Constructed via [`FromStr`], which compiles the template eagerly so that
/// syntax errors surface at creation time rather than at render time.
pub struct NameGenerator {
    engine: Engine<'static>,
    template: Template<'static>,
}
impl FromStr for NameGenerator {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut engine = Engine::new();
        addons::configure(&mut engine);
        let template = engine.compile(s.to_string()).or_raise(|| ErrorKind::Template)?;
        Ok(Self { engine, template })
    }
}
impl NameGenerator {
    /// Renders the name for `parse` classified as `genre`, extension included.
    ///
    /// Falls back to the parsed title (or nothing) when the template renders
    /// an empty name, so the result is never just an extension.
    #[instrument(skip_all, fields(title = %parse.title, %genre))]
    pub fn generate(&self, parse: &TitleParseResult, genre: Genre) -> Result<String> {
        let rendered = self
            .template
            .render(&self.engine, Self::parameters(parse, genre))
            .to_string()
            .or_raise(|| ErrorKind::Template)?;
        let mut stem = Self::normalize(&rendered);
        if stem.is_empty() {
            stem = Self::normalize(&parse.title);
        }
        if stem.is_empty() {
            exn::bail!(ErrorKind::Template);
        }
        Ok(format!("{stem}{}", parse.extension))
    }

    /// Plain spaces for every kind of Unicode space, zero-width characters
    /// dropped, runs collapsed, path separators replaced.
    fn normalize(s: &str) -> String {
        let cleaned: String = s
            .chars()
            .filter(|c| !matches!(c, '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}'))
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        collapse_whitespace(&cleaned)
    }

    fn parameters(parse: &TitleParseResult, genre: Genre) -> upon::Value {
        let side_stories = (!parse.side_story_tags.is_empty()).then(|| parse.side_story_tags.clone());
        upon::value! {
            genre: genre.is_classified().then(|| genre.as_str()),
            title: &parse.title,
            author: parse.author.as_deref(),
            volume: &parse.volume_info,
            range: &parse.range_info,
            completed: parse.is_completed,
            side_stories: side_stories,
            annotations: parse.annotations.clone(),
        }
    }
}

/// Custom [`upon`] extensions.
mod addons {
    use std::fmt::Write;
    use upon::{Engine, Value, fmt as upon_fmt};

    /// Renders a list as its items separated by `, `.
    fn join_formatter(f: &mut upon_fmt::Formatter<'_>, value: &Value) -> upon_fmt::Result {
        match value {
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    upon_fmt::default(f, item)?;
                }
            },
            Value::None => {},
            v => upon_fmt::default(f, v)?,
        };
        Ok(())
    }

    pub(crate) fn configure(engine: &mut Engine<'_>) {
        engine.add_formatter("join", join_formatter);
    }
}
