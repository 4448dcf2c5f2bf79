//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for URL mappings.
///
/// The `url.id` primary key is the only guard against id collisions; a
/// unique violation on insert surfaces as [`AppError::DuplicateKey`].
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: String,
    original_url: String,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for UrlMapping {
    fn from(row: UrlRow) -> Self {
        UrlMapping::new(row.id, row.original_url, row.created_at)
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO url (id, original_url)
            VALUES ($1, $2)
            RETURNING id, original_url, created_at
            "#,
        )
        .bind(&new_mapping.id)
        .bind(&new_mapping.original_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::DuplicateKey { .. } => AppError::duplicate_key(
                "Short id already exists",
                json!({ "id": new_mapping.id }),
            ),
            other => other,
        })?;

        Ok(row.into())
    }

    async fn lookup(&self, id: &str) -> Result<UrlMapping, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, created_at
            FROM url
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(UrlMapping::from)
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "id": id })))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
