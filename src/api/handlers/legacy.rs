//! Handler for legacy Markdown entry links.

use axum::{
    extract::Path,
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::utils::legacy_path::parse_legacy_file;

/// Redirects an old Markdown file link to the entry page.
///
/// # Endpoint
///
/// `GET /til/til/{topic}_{slug}.md`
///
/// Returns 301 Moved Permanently to `/{topic}/{slug}`.
///
/// # Errors
///
/// Returns 404 Not Found if the file name is not `{topic}_{slug}.md`.
/// Returns 400 Bad Request if the decoded name cannot be used in a `Location` header.
pub async fn legacy_redirect_handler(
    Path(file): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let entry = parse_legacy_file(&file).ok_or_else(|| {
        AppError::not_found("Not a legacy entry path", json!({ "file": file }))
    })?;

    if !entry.is_navigable() {
        return Err(AppError::bad_request(
            "Entry path cannot be used as a redirect target",
            json!({ "topic": entry.topic, "slug": entry.slug }),
        ));
    }

    let location = entry.path();
    debug!("Legacy path {} -> {}", file, location);

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]))
}
