#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use link_shortener::application::services::{
    AuthService, LinkService, RedirectService, TokenIssuer,
};
use link_shortener::domain::entities::{Link, NewLink, NewUser, User};
use link_shortener::domain::repositories::{LinkRepository, UserRepository};
use link_shortener::error::AppError;
use link_shortener::routes::app_router;
use link_shortener::state::AppState;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

pub const TEST_SECRET: &str = "test-signing-secret";
pub const TEST_BASE_URL: &str = "http://localhost:8000";

fn unique_violation(constraint: &str) -> AppError {
    AppError::conflict(
        "Unique constraint violation",
        json!({ "constraint": constraint }),
    )
}

/// User storage backed by a vector, enforcing the same unique username rule
/// as the `users` table.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == new_user.username) {
            return Err(unique_violation("users_username_key"));
        }

        let user = User::new(
            users.len() as i64 + 1,
            new_user.username,
            new_user.password_hash,
            Utc::now(),
        );
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.lock().unwrap().clone())
    }
}

/// Link storage backed by a vector, enforcing unique short codes.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<Link>>,
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.lock().unwrap();
        if links.iter().any(|l| l.short_code == new_link.short_code) {
            return Err(unique_violation("urls_short_code_key"));
        }

        let link = Link::new(
            links.len() as i64 + 1,
            new_link.short_code,
            new_link.original_url,
            new_link.owner_id,
            0,
            Utc::now(),
        );
        links.push(link.clone());
        Ok(link)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        let links = self.links.lock().unwrap();
        Ok(links.iter().find(|l| l.short_code == short_code).cloned())
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Link>, AppError> {
        let links = self.links.lock().unwrap();
        Ok(links
            .iter()
            .filter(|l| l.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        let mut links = self.links.lock().unwrap();
        Ok(links
            .iter_mut()
            .find(|l| l.short_code == short_code)
            .map(|l| {
                l.click_count += 1;
                l.clone()
            }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Link storage whose every call fails, for the degraded health check.
pub struct UnreachableLinkRepository;

#[async_trait]
impl LinkRepository for UnreachableLinkRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn find_by_code(&self, _short_code: &str) -> Result<Option<Link>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn list_by_owner(&self, _owner_id: i64) -> Result<Vec<Link>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn increment_clicks(&self, _short_code: &str) -> Result<Option<Link>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::internal("Database error", json!({})))
    }
}

pub fn test_issuer() -> TokenIssuer {
    TokenIssuer::new(TEST_SECRET, Duration::minutes(60))
}

pub fn create_test_state_with(
    users: Arc<dyn UserRepository>,
    links: Arc<dyn LinkRepository>,
) -> AppState {
    let auth_service = Arc::new(AuthService::new(users, test_issuer()));
    let link_service = Arc::new(LinkService::new(
        links.clone(),
        TEST_BASE_URL.to_string(),
        6,
    ));
    let redirect_service = Arc::new(RedirectService::new(links));

    AppState::new(auth_service, link_service, redirect_service)
}

pub fn create_test_state() -> AppState {
    create_test_state_with(
        Arc::new(InMemoryUserRepository::default()),
        Arc::new(InMemoryLinkRepository::default()),
    )
}

/// Full router without rate limiting, served in memory.
pub fn test_server() -> TestServer {
    TestServer::new(app_router(create_test_state(), false)).unwrap()
}

pub async fn register(server: &TestServer, username: &str, password: &str) {
    server
        .post("/register")
        .json(&json!({ "username": username, "password": password }))
        .await
        .assert_status_ok();
}

pub async fn login(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/token")
        .form(&[("username", username), ("password", password)])
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    body["access_token"].as_str().unwrap().to_string()
}

/// Registers `username` and returns a valid access token for it.
pub async fn register_and_login(server: &TestServer, username: &str, password: &str) -> String {
    register(server, username, password).await;
    login(server, username, password).await
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Shortens `url` as the token's owner and returns the response body.
pub async fn shorten(server: &TestServer, token: &str, url: &str) -> Value {
    let response = server
        .post("/shorten")
        .add_header("Authorization", bearer(token))
        .json(&json!({ "original_url": url }))
        .await;
    response.assert_status_ok();
    response.json()
}

/// Extracts the short code from a `short_url`.
pub fn code_of(short_url: &Value) -> String {
    short_url
        .as_str()
        .unwrap()
        .rsplit('/')
        .next()
        .unwrap()
        .to_string()
}
