//! In-memory implementation of the URL repository.
//!
//! Mappings live only as long as the process. Used for local development
//! (`STORE_BACKEND=memory`) and for HTTP tests that need no database.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Process-local URL store backed by a concurrent hash map.
///
/// Insert goes through the map's entry API, so the existence check and the
/// write happen under the same shard lock.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    mappings: DashMap<String, UrlMapping>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        match self.mappings.entry(new_mapping.id) {
            Entry::Occupied(occupied) => Err(AppError::duplicate_key(
                "Short id already exists",
                json!({ "id": occupied.key() }),
            )),
            Entry::Vacant(vacant) => {
                let mapping = UrlMapping::new(
                    vacant.key().clone(),
                    new_mapping.original_url,
                    Utc::now(),
                );
                vacant.insert(mapping.clone());
                Ok(mapping)
            }
        }
    }

    async fn lookup(&self, id: &str) -> Result<UrlMapping, AppError> {
        self.mappings
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "id": id })))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.mappings.len() as i64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
