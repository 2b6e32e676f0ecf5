//! Validation and canonical serialization of submitted URLs.
//!
//! Submitted URLs are parsed with WHATWG rules and re-serialized, so the stored
//! form is stable: scheme and host are lowercased, default ports are dropped
//! and an empty path becomes `/` (`https://example.com` → `https://example.com/`).
//! Path, query and fragment are kept as submitted.

use url::Url;

/// Longest URL accepted for shortening.
pub const MAX_URL_LENGTH: usize = 2083;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must contain a host")]
    MissingHost,

    #[error("URL exceeds {MAX_URL_LENGTH} characters")]
    TooLong,
}

/// Parses `input` as an absolute HTTP(S) URL and returns its canonical string.
///
/// # Errors
///
/// - [`UrlNormalizationError::InvalidFormat`] for malformed or relative URLs
/// - [`UrlNormalizationError::UnsupportedProtocol`] for `javascript:`, `ftp:`, `data:` and friends
/// - [`UrlNormalizationError::MissingHost`] if no host is present
/// - [`UrlNormalizationError::TooLong`] if the canonical form exceeds [`MAX_URL_LENGTH`]
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let url = Url::parse(input.trim())
        .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    let normalized = url.to_string();
    if normalized.len() > MAX_URL_LENGTH {
        return Err(UrlNormalizationError::TooLong);
    }

    Ok(normalized)
}
