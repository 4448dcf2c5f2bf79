//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::domain::IdGenerator;
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::cache::CacheService;

/// Handles shared across requests.
///
/// Cloning is cheap: every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub repository: Arc<dyn UrlRepository>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Wires the URL service over the given store, generator and cache.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        id_generator: Arc<dyn IdGenerator>,
        cache: Arc<dyn CacheService>,
        max_attempts: usize,
    ) -> Self {
        let url_service = Arc::new(
            UrlService::new(repository.clone(), id_generator, cache.clone())
                .with_max_attempts(max_attempts),
        );

        Self {
            url_service,
            repository,
            cache,
        }
    }
}
