//! Link creation, lookup and per-owner listing.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;

/// Unique constraint guarding short codes.
const SHORT_CODE_CONSTRAINT: &str = "urls_short_code_key";

/// Insert attempts before giving up on finding a free code.
const MAX_ATTEMPTS: usize = 10;

/// Service for creating and retrieving shortened links.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    base_url: String,
    code_length: usize,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the public prefix of short URLs, without trailing slash.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        base_url: String,
        code_length: usize,
    ) -> Self {
        Self {
            link_repository,
            base_url: base_url.trim_end_matches('/').to_string(),
            code_length,
        }
    }

    /// Creates a short link owned by `owner_id`.
    ///
    /// # Code Generation
    ///
    /// A random alphanumeric code is inserted directly; the storage unique
    /// constraint is the collision check. On a collision a new code is drawn,
    /// up to 10 attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not an absolute HTTP(S) URL.
    /// Returns [`AppError::Internal`] if every attempt collided or on database errors.
    pub async fn create(&self, owner_id: i64, original_url: &str) -> Result<Link, AppError> {
        let original_url = normalize_url(original_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        for attempt in 1..=MAX_ATTEMPTS {
            let new_link = NewLink {
                short_code: generate_code(self.code_length),
                original_url: original_url.clone(),
                owner_id,
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    tracing::info!(owner_id, short_code = %link.short_code, "Short link created");
                    return Ok(link);
                }
                Err(e) if e.is_conflict_on(SHORT_CODE_CONSTRAINT) => {
                    tracing::warn!(attempt, "Short code collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Lists all links owned by `owner_id` in insertion order.
    pub async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_by_owner(owner_id).await
    }

    /// Retrieves a link by its short code without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn find_by_code(&self, short_code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| AppError::link_not_found(short_code))
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.base_url, short_code)
    }

    /// Checks that link storage is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn link_from(new_link: NewLink, id: i64) -> Link {
        Link::new(
            id,
            new_link.short_code,
            new_link.original_url,
            new_link.owner_id,
            0,
            Utc::now(),
        )
    }

    fn collision() -> AppError {
        AppError::conflict(
            "Unique constraint violation",
            json!({ "constraint": "urls_short_code_key" }),
        )
    }

    fn service(repo: MockLinkRepository) -> LinkService {
        LinkService::new(Arc::new(repo), "http://localhost:8000/".to_string(), 6)
    }

    #[tokio::test]
    async fn test_create_success() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_link| {
                new_link.owner_id == 7
                    && new_link.original_url == "https://example.com/"
                    && new_link.short_code.len() == 6
                    && new_link.short_code.chars().all(|c| c.is_ascii_alphanumeric())
            })
            .times(1)
            .returning(|new_link| Ok(link_from(new_link, 1)));

        let link = service(mock_repo)
            .create(7, "https://example.com")
            .await
            .unwrap();

        assert_eq!(link.original_url, "https://example.com/");
        assert_eq!(link.click_count, 0);
        assert_eq!(link.owner_id, 7);
    }

    #[tokio::test]
    async fn test_create_uses_configured_length() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_link| new_link.short_code.len() == 10)
            .times(1)
            .returning(|new_link| Ok(link_from(new_link, 1)));

        let service = LinkService::new(Arc::new(mock_repo), "https://sho.rt".to_string(), 10);

        let link = service.create(1, "https://example.com/a").await.unwrap();

        assert_eq!(link.short_code.len(), 10);
    }

    #[tokio::test]
    async fn test_create_retries_on_collision() {
        let mut mock_repo = MockLinkRepository::new();
        let mut seq = mockall::Sequence::new();

        mock_repo
            .expect_create()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Err(collision()));

        mock_repo
            .expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|new_link| Ok(link_from(new_link, 3)));

        let link = service(mock_repo)
            .create(1, "https://example.com")
            .await
            .unwrap();

        assert_eq!(link.id, 3);
    }

    #[tokio::test]
    async fn test_create_gives_up_after_max_attempts() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create()
            .times(MAX_ATTEMPTS)
            .returning(|_| Err(collision()));

        let err = service(mock_repo)
            .create(1, "https://example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_create_does_not_retry_other_errors() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let err = service(mock_repo)
            .create(1, "https://example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_create_invalid_url() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_create().times(0);

        let err = service(mock_repo).create(1, "not-a-url").await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_find_by_code_not_found() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let err = service(mock_repo).find_by_code("zzzzzz").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_by_owner_passes_owner() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_list_by_owner()
            .withf(|owner_id| *owner_id == 42)
            .times(1)
            .returning(|_| Ok(vec![]));

        let links = service(mock_repo).list_by_owner(42).await.unwrap();

        assert!(links.is_empty());
    }

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let service = service(MockLinkRepository::new());

        assert_eq!(service.short_url("Ab3dE9"), "http://localhost:8000/Ab3dE9");
    }
}
