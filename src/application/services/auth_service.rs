//! Account registration, login and bearer-token authentication.

use std::sync::Arc;

use crate::application::services::token_issuer::TokenIssuer;
use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::{DUMMY_HASH, hash_password, verify_password};

/// Unique constraint guarding usernames.
const USERNAME_CONSTRAINT: &str = "users_username_key";

/// Service for user accounts and session tokens.
///
/// Passwords are stored as Argon2id hashes. Sessions are stateless HS256
/// tokens whose subject is the username.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: TokenIssuer,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenIssuer) -> Self {
        Self { users, tokens }
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] (`DuplicateUsername`) if the username is
    /// taken, whether detected up front or by the storage constraint.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::duplicate_username(username));
        }

        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create(NewUser {
                username: username.to_string(),
                password_hash,
            })
            .await
            .map_err(|e| {
                if e.is_conflict_on(USERNAME_CONSTRAINT) {
                    AppError::duplicate_username(username)
                } else {
                    e
                }
            })?;

        tracing::info!(user_id = user.id, "User registered");
        metrics::counter!("users_registered_total").increment(1);

        Ok(user)
    }

    /// Checks credentials and returns a fresh access token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] (`BadCredentials`) for an unknown user
    /// or a wrong password; both cases are indistinguishable to the caller.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let user = self.users.find_by_username(username).await?;

        // Unknown users are checked against a dummy hash so both failures take as long.
        let stored_hash = user
            .as_ref()
            .map_or(DUMMY_HASH, |user| user.password_hash.as_str());
        let verified = verify_password(password, stored_hash);

        let user = match user {
            Some(user) if verified => user,
            _ => {
                tracing::debug!("Login rejected");
                metrics::counter!("login_failures_total").increment(1);
                return Err(AppError::bad_credentials());
            }
        };

        self.tokens.issue(&user.username, self.tokens.default_ttl())
    }

    /// Resolves a bearer token to the user it was issued for.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, has a bad
    /// signature, has expired, or names a user that no longer exists.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let username = self.tokens.verify(token).map_err(|e| {
            tracing::debug!("Token rejected: {}", e);
            AppError::unauthenticated()
        })?;

        self.users
            .find_by_username(&username)
            .await?
            .ok_or_else(AppError::unauthenticated)
    }
}
