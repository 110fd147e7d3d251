//! Handler for the random entry redirect.

use axum::{extract::State, response::Redirect};

use crate::state::AppState;

/// Redirects to a randomly chosen entry.
///
/// # Endpoint
///
/// `GET /random`
///
/// # Request Flow
///
/// 1. Ask the data API for one random `(topic, slug)` row
/// 2. Return 307 Temporary Redirect to `/{topic}/{slug}`
///
/// Empty results and every kind of lookup failure redirect to `/all` instead.
/// This route never answers with an error status.
pub async fn random_entry_handler(State(state): State<AppState>) -> Redirect {
    let navigation = state.random_entry_service.navigate_to_random_entry().await;

    Redirect::temporary(&navigation.path())
}
