//! Handler for listing the caller's links.

use axum::{Extension, Json, extract::State};

use crate::api::dto::links::LinkResponse;
use crate::api::middleware::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every link owned by the authenticated user with its click count.
///
/// # Endpoint
///
/// `GET /links` (Bearer token required)
///
/// # Response
///
/// ```json
/// [
///   { "short_url": "http://localhost:8000/Ab3dE9", "original_url": "https://example.com/", "click_count": 1 }
/// ]
/// ```
pub async fn links_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_by_owner(user.id).await?;

    let items = links
        .into_iter()
        .map(|link| LinkResponse {
            short_url: state.link_service.short_url(&link.short_code),
            original_url: link.original_url,
            click_count: link.click_count,
        })
        .collect();

    Ok(Json(items))
}
