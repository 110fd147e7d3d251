//! Application layer services.
//!
//! Services consume repository traits and provide a small API for HTTP
//! handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::random_entry_service::RandomEntryService`] - Random entry navigation

pub mod services;
