//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Name of the configured storage backend, reported by the health check.
    pub storage_backend: &'static str,
}

impl AppState {
    /// Wires the registry over the given storage handle.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        max_attempts: usize,
        storage_backend: &'static str,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::with_max_attempts(
                link_repository,
                max_attempts,
            )),
            storage_backend,
        }
    }
}
