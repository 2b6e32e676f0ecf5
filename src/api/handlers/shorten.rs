//! Handler for link shortening endpoint.

use axum::{Extension, Json, extract::State};
use validator::Validate;

use crate::api::dto::links::{LinkResponse, ShortenRequest};
use crate::api::middleware::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link owned by the authenticated user.
///
/// # Endpoint
///
/// `POST /shorten` (Bearer token required)
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:8000/Ab3dE9",
///   "original_url": "https://example.com/",
///   "click_count": 0
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is not an absolute HTTP(S) URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create(user.id, &payload.original_url)
        .await?;

    Ok(Json(LinkResponse {
        short_url: state.link_service.short_url(&link.short_code),
        original_url: link.original_url,
        click_count: link.click_count,
    }))
}
