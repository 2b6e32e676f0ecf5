//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL and counts the click.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// # Response
///
/// `302 Found` with `Location: <original_url>`. The click counter is
/// incremented before the response is sent.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let original_url = state
        .redirect_service
        .resolve_and_count(&short_code)
        .await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]).into_response())
}
