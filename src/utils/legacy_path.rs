//! Legacy Markdown entry path parsing.
//!
//! Entries used to be browsed as Markdown files named `{topic}_{slug}.md`.
//! Old links to those files are redirected to the entry page.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::entities::EntryRef;

static LEGACY_FILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<topic>[^_]+)_(?P<slug>[^.]+)\.md$").unwrap());

/// Parses a legacy file name such as `python_dataclasses.md`.
///
/// The topic runs up to the first underscore; the slug runs from there to
/// `.md`, which must end the name. Returns `None` for anything else.
///
/// # Examples
///
/// ```ignore
/// let entry = parse_legacy_file("python_data_classes.md").unwrap();
/// assert_eq!(entry.topic, "python");
/// assert_eq!(entry.slug, "data_classes");
/// ```
pub fn parse_legacy_file(file: &str) -> Option<EntryRef> {
    let captures = LEGACY_FILE_REGEX.captures(file)?;
    Some(EntryRef::new(&captures["topic"], &captures["slug"]))
}
