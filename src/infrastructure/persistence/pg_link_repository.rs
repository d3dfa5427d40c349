//! PostgreSQL implementation of the link repository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
///
/// Alias uniqueness is enforced by the `links_alias_key` constraint, so a
/// racing insert loses inside the storage engine rather than in application
/// code. The insert touches a single row, which also gives the cancellation
/// guarantee: an abandoned `create` either fully applied or did not happen.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, url: &str, alias: &str) -> Result<(), AppError> {
        sqlx::query("INSERT INTO links (url, alias) VALUES ($1, $2)")
            .bind(url)
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| match e.as_database_error() {
                Some(db) if db.is_unique_violation() => AppError::DuplicateAlias {
                    alias: alias.to_string(),
                },
                _ => AppError::storage("create", e),
            })?;

        Ok(())
    }

    async fn get(&self, alias: &str) -> Result<String, AppError> {
        let url: Option<String> = sqlx::query_scalar("SELECT url FROM links WHERE alias = $1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(|e| AppError::storage("get", e))?;

        url.ok_or_else(|| AppError::NotFound {
            alias: alias.to_string(),
        })
    }

    async fn url_exists(&self, url: &str) -> Result<bool, AppError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM links WHERE url = $1)")
            .bind(url)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| AppError::storage("url_exists", e))
    }
}
