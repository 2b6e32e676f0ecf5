//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on the HTTP layer or on PostgreSQL;
//! concrete repositories live in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
