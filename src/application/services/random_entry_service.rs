//! Random entry navigation service.

use std::sync::Arc;

use metrics::counter;
use tracing::{debug, error, warn};

use crate::domain::entities::{FALLBACK_PATH, Navigation};
use crate::domain::repositories::EntryRepository;

/// Decides where a "random entry" request should go.
///
/// Performs one lookup per call and collapses every failure into the
/// fallback destination, so callers always get exactly one [`Navigation`].
pub struct RandomEntryService<R: EntryRepository + ?Sized> {
    entry_repository: Arc<R>,
}

impl<R: EntryRepository + ?Sized> RandomEntryService<R> {
    /// Creates a new random entry service.
    pub fn new(entry_repository: Arc<R>) -> Self {
        Self { entry_repository }
    }

    /// Looks up a random entry and returns where to navigate.
    ///
    /// # Outcomes
    ///
    /// - **Entry found**: [`Navigation::Entry`] with the first row
    /// - **No rows**: [`Navigation::Fallback`], logged at `WARN`
    /// - **Lookup failed**: [`Navigation::Fallback`], logged at `ERROR`
    /// - **Entry path not usable as a redirect target**: [`Navigation::Fallback`],
    ///   logged at `ERROR`
    ///
    /// Increments `til_random_navigations_total{outcome}` once per call.
    pub async fn navigate_to_random_entry(&self) -> Navigation {
        let navigation = match self.entry_repository.random_entry().await {
            Ok(Some(entry)) if entry.is_navigable() => {
                debug!("Random entry: {}", entry.path());
                Navigation::Entry(entry)
            }
            Ok(Some(entry)) => {
                error!(
                    topic = %entry.topic,
                    slug = %entry.slug,
                    "Error fetching random entry: path is not a valid redirect target"
                );
                Navigation::Fallback
            }
            Ok(None) => {
                warn!("Random entry lookup returned no rows, redirecting to {FALLBACK_PATH}");
                Navigation::Fallback
            }
            Err(e) => {
                error!("Error fetching random entry: {}", e);
                Navigation::Fallback
            }
        };

        counter!("til_random_navigations_total", "outcome" => navigation.outcome()).increment(1);

        navigation
    }

    /// Reports whether the entry store is reachable.
    pub async fn health_check(&self) -> bool {
        self.entry_repository.health_check().await
    }
}
