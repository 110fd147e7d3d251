//! Utility helpers shared across layers.

pub mod legacy_path;
