//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Data API reachable
/// - **503 Service Unavailable**: Data API unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "data_api": { "status": "ok", "message": "Data API reachable" }
///   }
/// }
/// ```
///
/// A degraded data API does not break `/random`; it only means every
/// request currently lands on the fallback page.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let data_api_check = check_data_api(&state).await;

    let healthy = data_api_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            data_api: data_api_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_data_api(state: &AppState) -> CheckStatus {
    if state.random_entry_service.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Data API reachable".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Data API unreachable".to_string()),
        }
    }
}
