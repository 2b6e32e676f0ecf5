//! Short code resolution with click counting.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::is_well_formed;

/// Resolves short codes to their original URLs.
///
/// Every successful resolution is a write: the click counter is incremented
/// atomically by the repository in the same statement that reads the URL.
pub struct RedirectService {
    link_repository: Arc<dyn LinkRepository>,
}

impl RedirectService {
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Counts a click on `short_code` and returns the URL to redirect to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code. Codes that are
    /// not alphanumeric are rejected without a storage round trip.
    pub async fn resolve_and_count(&self, short_code: &str) -> Result<String, AppError> {
        if !is_well_formed(short_code) {
            return Err(AppError::link_not_found(short_code));
        }

        let link = self
            .link_repository
            .increment_clicks(short_code)
            .await?
            .ok_or_else(|| AppError::link_not_found(short_code))?;

        tracing::debug!(short_code, clicks = link.click_count, "Redirect resolved");
        metrics::counter!("redirects_total").increment(1);

        Ok(link.original_url)
    }
}
