//! In-process implementation of link repository.

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Link storage held in a [`DashMap`] keyed by short code.
///
/// The entry API makes insert-if-absent atomic, which gives the same
/// uniqueness guarantee as the database constraint. Mutations run under the
/// shard lock of their key, so visit increments are never lost.
///
/// Contents are lost when the process exits.
pub struct MemoryLinkRepository {
    links: DashMap<String, Link>,
    next_id: AtomicI64,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        debug!("Using in-memory link storage");
        Self {
            links: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        match self.links.entry(new_link.short_code) {
            Entry::Occupied(entry) => Err(AppError::duplicate_key(
                "Short code already exists",
                json!({ "short_code": entry.key() }),
            )),
            Entry::Vacant(entry) => {
                let now = Utc::now();
                let link = Link::new(
                    self.next_id.fetch_add(1, Ordering::Relaxed),
                    new_link.url,
                    entry.key().clone(),
                    now,
                    now,
                    0,
                );
                entry.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get(short_code).map(|entry| entry.clone()))
    }

    async fn increment_visits(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get_mut(short_code).map(|mut entry| {
            entry.visit_count += 1;
            entry.clone()
        }))
    }

    async fn update_url(&self, short_code: &str, url: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get_mut(short_code).map(|mut entry| {
            entry.url = url.to_string();
            // Stored timestamps are compared at microsecond precision.
            entry.updated_at = Utc::now().max(entry.updated_at + TimeDelta::microseconds(1));
            entry.clone()
        }))
    }

    async fn delete(&self, short_code: &str) -> Result<bool, AppError> {
        Ok(self.links.remove(short_code).is_some())
    }

    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<Link>, AppError> {
        let mut links: Vec<Link> = self.links.iter().map(|entry| entry.clone()).collect();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let offset = ((page - 1) * page_size).max(0) as usize;

        Ok(links
            .into_iter()
            .skip(offset)
            .take(page_size.max(0) as usize)
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.len() as i64)
    }

    async fn total_visits(&self) -> Result<i64, AppError> {
        Ok(self.links.iter().map(|entry| entry.visit_count).sum())
    }
}
