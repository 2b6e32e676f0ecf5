//! API route groups.

use crate::api::handlers::{links_handler, register_handler, shorten_handler, token_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Account routes, open to anonymous callers.
///
/// - `POST /register` - Create an account
/// - `POST /token`    - Log in and receive an access token
pub fn credential_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/token", post(token_handler))
}

/// Link routes, protected by Bearer token authentication.
///
/// - `POST /shorten` - Create a short link owned by the caller
/// - `GET  /links`   - List the caller's links with click counts
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/links", get(links_handler))
}
