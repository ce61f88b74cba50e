//! Registry behavior under concurrent callers, over the in-memory store.

use link_registry::application::services::LinkService;
use link_registry::domain::repositories::LinkRepository;
use link_registry::infrastructure::persistence::MemoryLinkRepository;
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_yield_unique_codes() {
    let repo = Arc::new(MemoryLinkRepository::new());
    let service = Arc::new(LinkService::new(repo.clone()));

    let tasks: Vec<_> = (0..200)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move { service.create(format!("https://example.com/{i}")).await })
        })
        .collect();

    let mut codes = HashSet::new();
    for task in tasks {
        let link = task.await.unwrap().unwrap();
        assert_eq!(link.short_code.len(), 6);
        codes.insert(link.short_code);
    }

    assert_eq!(codes.len(), 200);
    assert_eq!(repo.count().await.unwrap(), 200);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_resolves_count_every_visit() {
    let repo = Arc::new(MemoryLinkRepository::new());
    let service = Arc::new(LinkService::new(repo.clone()));
    let link = service.create("https://example.com".to_string()).await.unwrap();

    let tasks: Vec<_> = (0..100)
        .map(|_| {
            let service = service.clone();
            let code = link.short_code.clone();
            tokio::spawn(async move { service.resolve(&code).await })
        })
        .collect();

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let stats = service.get_stats(&link.short_code).await.unwrap();
    assert_eq!(stats.visit_count, 100);
}
