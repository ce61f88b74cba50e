//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A persisted short link with its visit counter.
///
/// `short_code` and `created_at` never change after creation. `updated_at`
/// moves only when `url` is replaced; visits bump `visit_count` alone.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub visit_count: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        url: String,
        short_code: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        visit_count: i64,
    ) -> Self {
        Self {
            id,
            url,
            short_code,
            created_at,
            updated_at,
            visit_count,
        }
    }

    /// Returns true if the URL has been replaced since creation.
    pub fn is_modified(&self) -> bool {
        self.updated_at > self.created_at
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub short_code: String,
    pub url: String,
}

impl NewLink {
    pub fn new(short_code: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
            url: url.into(),
        }
    }
}
