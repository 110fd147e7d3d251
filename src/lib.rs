//! # til-random
//!
//! "Go to a random entry" for a TIL site whose content is served by a
//! Datasette JSON API.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entry references, navigation outcome, repository traits
//! - **Application Layer** ([`application`]) - The random entry navigation flow
//! - **Infrastructure Layer** ([`infrastructure`]) - Data API client
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Behaviour
//!
//! `GET /random` asks the data API for one random `(topic, slug)` row and
//! redirects to `/{topic}/{slug}`. An empty result or any failure redirects to
//! `/all` instead, after logging the error.
//!
//! ## Quick Start
//!
//! ```bash
//! export DATA_API_URL="http://127.0.0.1:8001/"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::RandomEntryService;
    pub use crate::domain::entities::{EntryRef, FALLBACK_PATH, Navigation};
    pub use crate::domain::repositories::{EntryRepository, LookupError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
