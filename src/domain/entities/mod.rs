//! Core domain entities.
//!
//! - [`EntryRef`] - The `(topic, slug)` pair identifying one TIL entry
//! - [`Navigation`] - Where a "random entry" request ends up

pub mod entry;
pub mod navigation;

pub use entry::EntryRef;
pub use navigation::{FALLBACK_PATH, Navigation};
