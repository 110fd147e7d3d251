//! HTTP request handlers.

pub mod health;
pub mod legacy;
pub mod random;

pub use health::health_handler;
pub use legacy::legacy_redirect_handler;
pub use random::random_entry_handler;
