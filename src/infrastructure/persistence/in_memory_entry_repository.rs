//! In-memory entry repository.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::entities::EntryRef;
use crate::domain::repositories::{EntryRepository, LookupError};

/// Entry repository serving a fixed list of entries.
///
/// Entries are handed out in rotation rather than at random, which keeps
/// runs reproducible. An empty list behaves like an empty result set.
///
/// # Use Cases
///
/// - Running the service without a data API
/// - Integration tests
pub struct InMemoryEntryRepository {
    entries: Vec<EntryRef>,
    next: AtomicUsize,
    unavailable: bool,
}

impl InMemoryEntryRepository {
    /// Creates a repository serving `entries`.
    pub fn new(entries: Vec<EntryRef>) -> Self {
        Self {
            entries,
            next: AtomicUsize::new(0),
            unavailable: false,
        }
    }

    /// Creates a repository whose lookups always fail with `503`.
    pub fn unavailable() -> Self {
        Self {
            entries: Vec::new(),
            next: AtomicUsize::new(0),
            unavailable: true,
        }
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn random_entry(&self) -> Result<Option<EntryRef>, LookupError> {
        if self.unavailable {
            return Err(LookupError::Status(503));
        }

        if self.entries.is_empty() {
            return Ok(None);
        }

        let index = self.next.fetch_add(1, Ordering::Relaxed) % self.entries.len();
        Ok(Some(self.entries[index].clone()))
    }

    async fn health_check(&self) -> bool {
        !self.unavailable
    }
}
