//! Shorten and resolve orchestration.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::IdGenerator;
use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::id_generator::is_valid_id;
use crate::utils::url_validator::validate_url;

/// Default number of ids tried per shorten call before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// Service for creating and resolving short URLs.
///
/// Holds explicit handles to the store, id generator and cache; there is no
/// process-wide connection.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    id_generator: Arc<dyn IdGenerator>,
    cache: Arc<dyn CacheService>,
    max_attempts: usize,
}

impl UrlService {
    /// Creates a new URL service with [`DEFAULT_MAX_ATTEMPTS`].
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        id_generator: Arc<dyn IdGenerator>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            repository,
            id_generator,
            cache,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets how many ids are tried before a shorten call fails.
    ///
    /// `1` disables regeneration: the first collision fails the call.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Generates a short id for `url` and stores the mapping.
    ///
    /// The URL is stored exactly as given.
    ///
    /// # Collisions
    ///
    /// A [`AppError::DuplicateKey`] from the store means the generated id is
    /// taken; a fresh id is drawn, up to `max_attempts` ids in total.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the URL is not a valid HTTP(S) URL
    /// - [`AppError::RandomnessUnavailable`] if no id can be generated (not retried)
    /// - [`AppError::StorageUnavailable`] on store failure (not retried)
    /// - [`AppError::Internal`] if every attempted id collided
    pub async fn shorten(&self, url: &str) -> Result<UrlMapping, AppError> {
        validate_url(url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        for attempt in 1..=self.max_attempts {
            let id = self.id_generator.generate()?;

            match self
                .repository
                .insert(NewUrlMapping::new(id, url))
                .await
            {
                Ok(mapping) => {
                    metrics::counter!("urls_shortened_total").increment(1);
                    info!(id = %mapping.id, "Shortened URL");
                    return Ok(mapping);
                }
                Err(AppError::DuplicateKey { details, .. }) => {
                    metrics::counter!("url_id_collisions_total").increment(1);
                    warn!(attempt, %details, "Short id collision");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique id",
            json!({ "reason": "Too many collisions", "attempts": self.max_attempts }),
        ))
    }

    /// Returns the original URL stored under `id`.
    ///
    /// Checks the cache first; on a miss the store is queried and the cache
    /// filled. Cache errors fall back to the store.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if `id` was never issued (including malformed ids)
    /// - [`AppError::StorageUnavailable`] on store failure
    pub async fn resolve(&self, id: &str) -> Result<String, AppError> {
        if !is_valid_id(id) {
            return Err(AppError::not_found(
                "Short URL not found",
                json!({ "id": id }),
            ));
        }

        match self.cache.get_url(id).await {
            Ok(Some(url)) => {
                metrics::counter!("url_cache_hits_total").increment(1);
                metrics::counter!("urls_resolved_total").increment(1);
                return Ok(url);
            }
            Ok(None) => debug!(id, "Cache miss"),
            Err(e) => warn!(id, "Cache error: {}", e),
        }

        let mapping = self.repository.lookup(id).await?;

        if let Err(e) = self
            .cache
            .set_url(&mapping.id, &mapping.original_url, None)
            .await
        {
            warn!(id, "Failed to cache URL: {}", e);
        }

        metrics::counter!("urls_resolved_total").increment(1);
        Ok(mapping.original_url)
    }

    /// Returns the number of stored mappings.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
