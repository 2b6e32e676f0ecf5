//! Helper functions used across the application.
//!
//! - [`code_generator`] - Random short code generation
//! - [`password`] - Argon2id password hashing (credential management)
//! - [`url_normalizer`] - URL validation and canonical form

pub mod code_generator;
pub mod password;
pub mod url_normalizer;
