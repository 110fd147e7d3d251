//! Repository trait for entry lookups.

use crate::domain::entities::EntryRef;
use async_trait::async_trait;
use thiserror::Error;

/// A random-entry lookup failed.
///
/// The variants only exist for diagnostics. Callers of the navigation flow
/// never see them: every variant leads to the fallback page.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request never produced a response (connection refused, DNS, TLS, body read).
    #[error("data API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The data API answered with a non-success status.
    #[error("data API answered with status {0}")]
    Status(u16),

    /// The body was not a JSON array of `{topic, slug}` rows.
    #[error("unexpected data API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Repository interface for looking up entries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::DatasetteEntryRepository`] - Datasette JSON API
/// - [`crate::infrastructure::persistence::InMemoryEntryRepository`] - Fixed entry list
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Picks one entry at random.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(entry))` - the first row of the result
    /// - `Ok(None)` - the result had no rows
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] on transport failures, non-success statuses or
    /// malformed bodies.
    async fn random_entry(&self) -> Result<Option<EntryRef>, LookupError>;

    /// Checks whether the backing store is reachable.
    async fn health_check(&self) -> bool;
}
