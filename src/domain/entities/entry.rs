//! Entry reference identifying one TIL page.

use serde::Deserialize;

/// Identifies a single entry by its topic and slug.
///
/// Deserializes directly from a data API row (`{"topic": "...", "slug": "..."}`).
/// Extra columns in the row are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntryRef {
    pub topic: String,
    pub slug: String,
}

impl EntryRef {
    /// Creates a new entry reference.
    pub fn new(topic: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            slug: slug.into(),
        }
    }

    /// Returns the site path of the entry page: `/{topic}/{slug}`.
    ///
    /// Both values are interpolated verbatim, without percent-encoding.
    pub fn path(&self) -> String {
        format!("/{}/{}", self.topic, self.slug)
    }

    /// Returns true if [`Self::path`] can be sent as a `Location` header value.
    ///
    /// Header values reject control bytes other than tab. Non-ASCII text is
    /// sent as raw UTF-8.
    pub fn is_navigable(&self) -> bool {
        self.topic
            .bytes()
            .chain(self.slug.bytes())
            .all(|b| b == b'\t' || (b >= 0x20 && b != 0x7f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_path() {
        let entry = EntryRef::new("python", "dataclasses");
        assert_eq!(entry.path(), "/python/dataclasses");
    }

    #[test]
    fn test_entry_path_is_not_escaped() {
        let entry = EntryRef::new("c++", "move semantics?");
        assert_eq!(entry.path(), "/c++/move semantics?");
    }

    #[test]
    fn test_entry_deserializes_from_row() {
        let entry: EntryRef = serde_json::from_str(
            r#"{"topic": "rust", "slug": "lifetimes", "title": "ignored"}"#,
        )
        .unwrap();

        assert_eq!(entry, EntryRef::new("rust", "lifetimes"));
    }

    #[test]
    fn test_entry_row_requires_string_fields() {
        assert!(serde_json::from_str::<EntryRef>(r#"{"topic": "rust"}"#).is_err());
        assert!(serde_json::from_str::<EntryRef>(r#"{"topic": 1, "slug": "x"}"#).is_err());
    }

    #[test]
    fn test_is_navigable() {
        assert!(EntryRef::new("python", "dataclasses").is_navigable());
        assert!(EntryRef::new("c++", "move semantics?").is_navigable());
        assert!(EntryRef::new("café", "menu").is_navigable());
        assert!(EntryRef::new("日本語", "tab\tseparated").is_navigable());
        assert!(!EntryRef::new("python", "line\nbreak").is_navigable());
        assert!(!EntryRef::new("python", "nul\0").is_navigable());
        assert!(!EntryRef::new("del\x7f", "slug").is_navigable());
    }
}
