//! JSON representation of a link.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Link as returned by create, resolve, and update.
///
/// ```json
/// {
///   "id": 1,
///   "url": "https://example.com",
///   "shortCode": "aB3xYz",
///   "createdAt": "2024-01-15T10:30:00Z",
///   "updatedAt": "2024-01-15T10:30:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            url: link.url,
            short_code: link.short_code,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}
