//! Link entity representing a shortened URL owned by a user.

use chrono::{DateTime, Utc};

/// A short code mapped to an original URL, with its click counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub owner_id: i64,
    /// Incremented once per successful redirect; never decreases.
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        owner_id: i64,
        click_count: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            owner_id,
            click_count,
            created_at,
        }
    }
}

/// Input data for creating a new link. Click count always starts at zero.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_code: String,
    pub original_url: String,
    pub owner_id: i64,
}
