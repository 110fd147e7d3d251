//! Business logic services for the application layer.

pub mod random_entry_service;

pub use random_entry_service::RandomEntryService;
