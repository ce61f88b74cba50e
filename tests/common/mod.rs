#![allow(dead_code)]

use axum_test::TestServer;
use link_registry::domain::entities::{Link, NewLink};
use link_registry::domain::repositories::LinkRepository;
use link_registry::infrastructure::persistence::MemoryLinkRepository;
use link_registry::routes::router;
use link_registry::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

/// State over a fresh in-memory store. The store is returned so tests can
/// seed and inspect it directly.
pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repo = Arc::new(MemoryLinkRepository::new());
    let state = AppState::new(repo.clone(), 10, "memory");
    (state, repo)
}

/// Test server over the full router and a fresh in-memory store.
pub fn make_server() -> (TestServer, Arc<MemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    let server = TestServer::new(router(state)).unwrap();
    (server, repo)
}

pub async fn create_test_link(repo: &MemoryLinkRepository, code: &str, url: &str) -> Link {
    repo.create(NewLink::new(code, url)).await.unwrap()
}

pub async fn insert_link_row(pool: &PgPool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO links (short_code, url) VALUES ($1, $2) RETURNING id")
        .bind(code)
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}
