//! DTO for the link update endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request body for `PUT /shorten/{shortCode}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    /// New destination URL for this link.
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,
}
