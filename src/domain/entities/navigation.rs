//! Outcome of a random-entry request.

use super::EntryRef;

/// Listing page used whenever no random entry can be determined.
pub const FALLBACK_PATH: &str = "/all";

/// Where a single random-entry request navigates to.
///
/// Every request produces exactly one `Navigation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Go to the page of the chosen entry.
    Entry(EntryRef),
    /// Go to [`FALLBACK_PATH`].
    Fallback,
}

impl Navigation {
    /// Returns the destination path.
    pub fn path(&self) -> String {
        match self {
            Self::Entry(entry) => entry.path(),
            Self::Fallback => FALLBACK_PATH.to_string(),
        }
    }

    /// Returns the outcome label used in logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Entry(_) => "entry",
            Self::Fallback => "fallback",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }
}
