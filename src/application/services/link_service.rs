//! Link registry: short code allocation and link lifecycle.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_reserved};
use serde_json::json;
use tracing::{debug, info, warn};

/// Default number of attempts for code allocation.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Service for creating, resolving, and managing short links.
///
/// Holds no state besides the injected repository handle. Uniqueness of
/// generated codes is checked before insert and backstopped by the storage
/// constraint: an insert that loses the race is retried with a fresh code.
pub struct LinkService<L: LinkRepository + ?Sized = dyn LinkRepository> {
    link_repository: Arc<L>,
    max_attempts: usize,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service with the default retry budget.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self::with_max_attempts(link_repository, DEFAULT_MAX_ATTEMPTS)
    }

    /// Creates a new link service with an explicit retry budget.
    ///
    /// A budget of zero is raised to one.
    pub fn with_max_attempts(link_repository: Arc<L>, max_attempts: usize) -> Self {
        Self {
            link_repository,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Finds a short code that no stored link currently uses.
    ///
    /// Reserved route segments count as taken. The result is only free at the
    /// instant of the check; [`Self::create`] handles the insert race.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeSpaceExhausted`] after `max_attempts` collisions.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn allocate_unique_code(&self) -> Result<String, AppError> {
        self.allocate_from(generate_code).await
    }

    /// Allocation loop over an arbitrary code source.
    async fn allocate_from(
        &self,
        mut next_code: impl FnMut() -> String + Send,
    ) -> Result<String, AppError> {
        for attempt in 1..=self.max_attempts {
            let code = next_code();

            if is_reserved(&code) {
                warn!(code = %code, attempt, "Generated reserved short code, retrying");
                continue;
            }

            if self.link_repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }

            warn!(code = %code, attempt, "Short code collision, retrying");
        }

        Err(self.exhausted())
    }

    /// Shortens `url` under a freshly allocated code.
    ///
    /// The URL is stored as given. A [`AppError::DuplicateKey`] from storage
    /// means a concurrent create took the code between check and insert; a new
    /// code is allocated and the insert retried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeSpaceExhausted`] if no code could be placed.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create(&self, url: String) -> Result<Link, AppError> {
        for attempt in 1..=self.max_attempts {
            let code = self.allocate_unique_code().await?;

            match self
                .link_repository
                .create(NewLink::new(code.clone(), url.clone()))
                .await
            {
                Ok(link) => {
                    info!(short_code = %link.short_code, id = link.id, "Short link created");
                    return Ok(link);
                }
                Err(e) if e.is_duplicate_key() => {
                    warn!(code = %code, attempt, "Short code taken at insert, reallocating");
                }
                Err(e) => return Err(e),
            }
        }

        Err(self.exhausted())
    }

    /// Resolves a short code, counting one visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, short_code: &str) -> Result<Link, AppError> {
        let link = self
            .link_repository
            .increment_visits(short_code)
            .await?
            .ok_or_else(|| not_found(short_code))?;

        debug!(short_code, visit_count = link.visit_count, "Short link resolved");
        Ok(link)
    }

    /// Returns a link with its current visit count, without counting a visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_stats(&self, short_code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| not_found(short_code))
    }

    /// Points an existing short code at a new URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update(&self, short_code: &str, new_url: String) -> Result<Link, AppError> {
        let link = self
            .link_repository
            .update_url(short_code, &new_url)
            .await?
            .ok_or_else(|| not_found(short_code))?;

        info!(short_code, "Short link updated");
        Ok(link)
    }

    /// Permanently removes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete(&self, short_code: &str) -> Result<(), AppError> {
        if !self.link_repository.delete(short_code).await? {
            return Err(not_found(short_code));
        }

        info!(short_code, "Short link deleted");
        Ok(())
    }

    /// Lists links newest first.
    pub async fn list(&self, page: i64, page_size: i64) -> Result<Vec<Link>, AppError> {
        self.link_repository.list(page, page_size).await
    }

    /// Total number of stored links.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Visits counted across all links.
    pub async fn total_visits(&self) -> Result<i64, AppError> {
        self.link_repository.total_visits().await
    }

    fn exhausted(&self) -> AppError {
        AppError::exhausted(
            "Failed to allocate a unique short code",
            json!({ "attempts": self.max_attempts }),
        )
    }
}

fn not_found(short_code: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "short_code": short_code }))
}
