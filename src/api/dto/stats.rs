//! DTO for link statistics.

use serde::Serialize;

use super::link::LinkResponse;
use crate::domain::entities::Link;

/// Link fields plus the number of counted visits.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(flatten)]
    pub link: LinkResponse,
    pub access_count: i64,
}

impl From<Link> for StatsResponse {
    fn from(link: Link) -> Self {
        let access_count = link.visit_count;
        Self {
            link: link.into(),
            access_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_stats_response_shape() {
        let now = Utc::now();
        let link = Link::new(
            3,
            "https://example.com".to_string(),
            "aB3xYz".to_string(),
            now,
            now,
            7,
        );

        let body = serde_json::to_value(StatsResponse::from(link)).unwrap();

        assert_eq!(body["id"], 3);
        assert_eq!(body["shortCode"], "aB3xYz");
        assert_eq!(body["url"], "https://example.com");
        assert_eq!(body["accessCount"], 7);
        assert!(body.get("createdAt").is_some());
        assert!(body.get("updatedAt").is_some());
        assert!(body.get("visitCount").is_none());
    }
}
