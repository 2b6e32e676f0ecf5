//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link with `click_count = 0`.
    ///
    /// The storage unique constraint is the only collision check: callers
    /// are expected to retry with a fresh code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] with constraint `urls_short_code_key` if
    /// the short code already exists.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError>;

    /// Lists every link owned by `owner_id` in insertion order.
    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Link>, AppError>;

    /// Atomically increments the click counter and returns the updated link.
    ///
    /// Returns `Ok(None)` if no link has this short code.
    async fn increment_clicks(&self, short_code: &str) -> Result<Option<Link>, AppError>;

    /// Round-trips to storage; used by the health check.
    async fn ping(&self) -> Result<(), AppError>;
}
