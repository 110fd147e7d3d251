//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /random`          - Random entry redirect (public, never rate limited)
//! - `GET  /til/til/{file}`  - Legacy Markdown link redirect (public, rate limited)
//! - `GET  /health`          - Data API health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let public = api::routes::public_routes();
    let public = if behind_proxy {
        public.layer(rate_limit::proxied_layer())
    } else {
        public.layer(rate_limit::layer())
    };

    let router = Router::new()
        .merge(api::routes::navigation_routes())
        .merge(public)
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
