//! Core domain entities.
//!
//! - [`User`] - A registered account
//! - [`Link`] - A short code owned by a user
//!
//! Creation inputs live in separate `New*` structs so that database-assigned
//! fields (`id`, `created_at`, `click_count`) never have to be faked.

pub mod link;
pub mod user;

pub use link::{Link, NewLink};
pub use user::{NewUser, User};
