//! Domain layer containing the entry model and the data access contract.
//!
//! # Architecture
//!
//! - [`entities`] - Entry references and the navigation decision built from them
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on the HTTP or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - The navigation flow lives in [`crate::application::services`]

pub mod entities;
pub mod repositories;
