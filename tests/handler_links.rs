mod common;

use axum::http::StatusCode;
use link_registry::domain::repositories::LinkRepository;
use serde_json::{Value, json};

// ─── PUT (update) ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_link_url() {
    let (server, repo) = common::make_server();
    let created = common::create_test_link(&repo, "upd001", "https://old.com").await;

    let response = server
        .put("/shorten/upd001")
        .json(&json!({ "url": "https://new.com" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["url"], "https://new.com");
    assert_eq!(body["shortCode"], "upd001");
    assert_eq!(body["id"], created.id);

    let stored = repo.find_by_code("upd001").await.unwrap().unwrap();
    assert_eq!(stored.url, "https://new.com");
    assert_eq!(stored.created_at, created.created_at);
    assert!(stored.updated_at > created.updated_at);
}

#[tokio::test]
async fn test_update_link_keeps_visit_count() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "upd002", "https://old.com").await;
    server.get("/upd002").await.assert_status_ok();

    server
        .put("/shorten/upd002")
        .json(&json!({ "url": "https://new.com" }))
        .await
        .assert_status_ok();

    let stats = server.get("/stats/upd002").await.json::<Value>();
    assert_eq!(stats["accessCount"], 1);
}

#[tokio::test]
async fn test_update_link_rejects_bad_bodies() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "upd003", "https://old.com").await;

    let missing = server.put("/shorten/upd003").json(&json!({})).await;
    missing.assert_status_bad_request();
    assert_eq!(missing.json::<Value>()["error"]["code"], "validation_error");

    let malformed = server
        .put("/shorten/upd003")
        .bytes("{not json".into())
        .content_type("application/json")
        .await;
    malformed.assert_status_bad_request();
    assert_eq!(
        malformed.json::<Value>()["error"]["code"],
        "validation_error"
    );

    let stored = repo.find_by_code("upd003").await.unwrap().unwrap();
    assert_eq!(stored.url, "https://old.com");
}

#[tokio::test]
async fn test_update_link_not_found() {
    let (server, _repo) = common::make_server();

    let response = server
        .put("/shorten/ghost1")
        .json(&json!({ "url": "https://new.com" }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_update_link_empty_url() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "upd003", "https://old.com").await;

    let response = server
        .put("/shorten/upd003")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_bad_request();

    let stored = repo.find_by_code("upd003").await.unwrap().unwrap();
    assert_eq!(stored.url, "https://old.com");
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_link_success() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "del001", "https://example.com").await;

    let response = server.delete("/shorten/del001").await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.as_bytes().is_empty());
    assert!(repo.find_by_code("del001").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_link_not_found() {
    let (server, _repo) = common::make_server();

    server.delete("/shorten/nonexi").await.assert_status_not_found();
}

#[tokio::test]
async fn test_deleted_link_is_gone_everywhere() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "del002", "https://example.com").await;

    server
        .delete("/shorten/del002")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server.get("/del002").await.assert_status_not_found();
    server.get("/stats/del002").await.assert_status_not_found();
    server
        .put("/shorten/del002")
        .json(&json!({ "url": "https://new.com" }))
        .await
        .assert_status_not_found();
    server.delete("/shorten/del002").await.assert_status_not_found();
}
