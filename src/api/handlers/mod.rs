//! HTTP request handlers for API endpoints.

pub mod auth;
pub mod health;
pub mod links;
pub mod redirect;
pub mod shorten;

pub use auth::{register_handler, token_handler};
pub use health::health_handler;
pub use links::links_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
