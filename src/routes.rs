//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /register`       - Create an account (public, rate limited)
//! - `POST /token`          - Log in (public, rate limited)
//! - `POST /shorten`        - Create a short link (Bearer token)
//! - `GET  /links`          - List own links (Bearer token)
//! - `GET  /health`         - Health check (public)
//! - `GET  /{short_code}`   - Redirect (public)
//!
//! Static paths take precedence over `/{short_code}`, so `/links` and
//! `/health` are never treated as short codes.

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limited` - when `true`, `/register` and `/token` are limited per
///   peer IP; the server must then be served with connect info
pub fn app_router(state: AppState, rate_limited: bool) -> Router {
    let mut credential_router = api::routes::credential_routes();
    if rate_limited {
        credential_router = credential_router.layer(rate_limit::credentials_layer());
    }

    let protected_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/health", get(health_handler))
        .route("/{short_code}", get(redirect_handler))
        .merge(credential_router)
        .merge(protected_router)
        .with_state(state)
        .layer(tracing::layer())
}
