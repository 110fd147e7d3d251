//! Repository trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`EntryRepository`] - Random entry lookups against the data API

pub mod entry_repository;

pub use entry_repository::{EntryRepository, LookupError};

#[cfg(test)]
pub use entry_repository::MockEntryRepository;
