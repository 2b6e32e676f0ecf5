//! PostgreSQL repository implementations.
//!
//! Queries are built with SQLx runtime-checked statements and mapped through
//! `FromRow` row structs.
//!
//! - [`PgUserRepository`] - User accounts
//! - [`PgLinkRepository`] - Short links and click counters

pub mod pg_link_repository;
pub mod pg_user_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_user_repository::PgUserRepository;
