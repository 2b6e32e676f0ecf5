mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_shorten_requires_token() {
    let server = common::test_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "original_url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(response.header("www-authenticate"), "Bearer");
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "unauthorized");
}

#[tokio::test]
async fn test_shorten_success() {
    let server = common::test_server();
    let token = common::register_and_login(&server, "alice", "pw123").await;

    let body = common::shorten(&server, &token, "https://example.com").await;

    assert_eq!(body["original_url"], "https://example.com/");
    assert_eq!(body["click_count"], 0);

    let short_url = body["short_url"].as_str().unwrap();
    assert!(short_url.starts_with("http://localhost:8000/"));

    let code = common::code_of(&body["short_url"]);
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn test_shorten_keeps_path_query_and_fragment() {
    let server = common::test_server();
    let token = common::register_and_login(&server, "alice", "pw123").await;

    let body = common::shorten(&server, &token, "https://example.com/a/b?x=1#top").await;

    assert_eq!(body["original_url"], "https://example.com/a/b?x=1#top");
}

#[tokio::test]
async fn test_shorten_same_url_twice_gives_distinct_codes() {
    let server = common::test_server();
    let token = common::register_and_login(&server, "alice", "pw123").await;

    let first = common::shorten(&server, &token, "https://example.com").await;
    let second = common::shorten(&server, &token, "https://example.com").await;

    assert_ne!(first["short_url"], second["short_url"]);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = common::test_server();
    let token = common::register_and_login(&server, "alice", "pw123").await;

    for url in ["not a url", "ftp://example.com/file", "/relative/path", ""] {
        let response = server
            .post("/shorten")
            .add_header("Authorization", common::bearer(&token))
            .json(&json!({ "original_url": url }))
            .await;

        assert_eq!(response.status_code(), 400, "url: {url:?}");
    }
}

#[tokio::test]
async fn test_shorten_url_too_long() {
    let server = common::test_server();
    let token = common::register_and_login(&server, "alice", "pw123").await;

    let url = format!("https://example.com/{}", "a".repeat(2100));
    let response = server
        .post("/shorten")
        .add_header("Authorization", common::bearer(&token))
        .json(&json!({ "original_url": url }))
        .await;

    assert_eq!(response.status_code(), 400);
}
