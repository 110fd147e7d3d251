//! Infrastructure layer for external integrations.
//!
//! Implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Entry repositories (Datasette JSON API and in-memory)

pub mod persistence;
