//! Entry repository implementations.
//!
//! # Repositories
//!
//! - [`DatasetteEntryRepository`] - Queries a Datasette instance over its JSON API
//! - [`InMemoryEntryRepository`] - Serves entries from a fixed list

pub mod datasette_entry_repository;
pub mod in_memory_entry_repository;

pub use datasette_entry_repository::{DatasetteEntryRepository, SetupError};
pub use in_memory_entry_repository::InMemoryEntryRepository;
