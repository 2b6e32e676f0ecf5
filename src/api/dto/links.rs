//! DTOs for link shortening and listing.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// JSON body of `POST /shorten`.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten (absolute HTTP or HTTPS, see
    /// [`crate::utils::url_normalizer::MAX_URL_LENGTH`]).
    #[validate(length(min = 1, max = 2083))]
    pub original_url: String,
}

/// A link as returned by `POST /shorten` and `GET /links`.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub short_url: String,
    pub original_url: String,
    pub click_count: i64,
}
