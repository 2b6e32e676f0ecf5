//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::AuthService`] - Registration, login and token authentication
//! - [`services::TokenIssuer`] - Signed, expiring access tokens
//! - [`services::LinkService`] - Short link creation and listing
//! - [`services::RedirectService`] - Code resolution with click counting

pub mod services;
