//! HTTP layer for the public routes.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and rate limiting
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
