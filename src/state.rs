//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService, RedirectService};

/// Services shared by all request handlers.
///
/// Cheap to clone: every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
}

impl AppState {
    pub fn new(
        auth_service: Arc<AuthService>,
        link_service: Arc<LinkService>,
        redirect_service: Arc<RedirectService>,
    ) -> Self {
        Self {
            auth_service,
            link_service,
            redirect_service,
        }
    }
}
