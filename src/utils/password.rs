//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use serde_json::json;

use crate::error::AppError;

/// Well-formed Argon2id hash (default cost parameters) that matches no
/// password. Verifying against it costs as much as verifying a real account.
pub const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Hashes `password` with Argon2id and a fresh random salt.
///
/// Returns a PHC string (`$argon2id$v=19$...`) that embeds the salt and cost
/// parameters, so hashing the same password twice yields different strings.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the hasher rejects its input.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!("Password hashing failed: {}", e);
            AppError::internal("Password hashing failed", json!({}))
        })
}

/// Verifies `password` against a stored PHC hash.
///
/// The digest comparison is constant-time. A malformed stored hash is logged
/// and treated as a mismatch.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Stored password hash is malformed: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
