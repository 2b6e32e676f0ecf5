//! Short code generation.
//!
//! Codes are drawn uniformly from `[A-Za-z0-9]`. Uniqueness is enforced by the
//! storage layer; see [`crate::application::services::LinkService`] for the
//! retry loop.

use rand::Rng;

/// Alphabet for generated short codes.
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default length of generated short codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generates a random alphanumeric short code of `length` characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Returns true if `code` could have been produced by [`generate_code`] for some length.
///
/// Used to reject obviously invalid paths before touching storage.
pub fn is_well_formed(code: &str) -> bool {
    !code.is_empty() && code.len() <= 32 && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
