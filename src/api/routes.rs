//! Public route configuration.

use crate::api::handlers::{legacy_redirect_handler, random_entry_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Navigation trigger routes.
///
/// Always answer with a redirect, so they sit outside the rate limiter.
///
/// # Endpoints
///
/// - `GET /random`          - Redirect to a random entry (or `/all`)
pub fn navigation_routes() -> Router<AppState> {
    Router::new().route("/random", get(random_entry_handler))
}

/// Public, rate limited routes.
///
/// # Endpoints
///
/// - `GET /til/til/{file}`  - Redirect a legacy `{topic}_{slug}.md` link
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/til/til/{file}", get(legacy_redirect_handler))
}
