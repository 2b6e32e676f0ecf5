//! Handlers for account registration and login.

use axum::{Form, Json, extract::State};
use validator::Validate;

use crate::api::dto::auth::{LoginForm, RegisterRequest, TokenResponse, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "pw123" }
/// ```
///
/// # Response
///
/// ```json
/// { "id": 1, "username": "alice" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the username is taken or the body is invalid.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;

    let user = state
        .auth_service
        .register(&payload.username, &payload.password)
        .await?;

    Ok(Json(user.into()))
}

/// Exchanges username and password for an access token.
///
/// # Endpoint
///
/// `POST /token` with `application/x-www-form-urlencoded` body
/// `username=alice&password=pw123`.
///
/// # Response
///
/// ```json
/// { "access_token": "eyJ...", "token_type": "bearer" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request on an unknown username or wrong password.
pub async fn token_handler(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, AppError> {
    let access_token = state
        .auth_service
        .login(&form.username, &form.password)
        .await?;

    Ok(Json(TokenResponse::bearer(access_token)))
}
