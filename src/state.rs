//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::RandomEntryService;
use crate::domain::repositories::EntryRepository;

#[derive(Clone)]
pub struct AppState {
    pub random_entry_service: Arc<RandomEntryService<dyn EntryRepository>>,
}

impl AppState {
    /// Builds the state around an entry repository.
    pub fn new(entry_repository: Arc<dyn EntryRepository>) -> Self {
        Self {
            random_entry_service: Arc::new(RandomEntryService::new(entry_repository)),
        }
    }
}
