//! Shorten/resolve facade consumed by the transport layer.

use crate::application::services::AliasAllocator;
use crate::domain::entities::Link;
use crate::error::AppError;

/// The two user-facing operations, bound to any transport.
///
/// A thin facade over [`AliasAllocator`]: it owns no uniqueness policy of
/// its own, it only shapes allocator results into [`Link`] entities and
/// formats public short URLs.
pub struct ShortenerService {
    allocator: AliasAllocator,
    base_url: String,
}

impl ShortenerService {
    /// Creates a new shortener facade.
    pub fn new(allocator: AliasAllocator, base_url: String) -> Self {
        Self {
            allocator,
            base_url,
        }
    }

    /// Assigns a fresh alias to `url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AlreadyShortened`], [`AppError::AllocationExhausted`]
    /// or [`AppError::Storage`]; collision errors never escape the allocator.
    pub async fn shorten(&self, url: &str) -> Result<Link, AppError> {
        let alias = self.allocator.allocate(url).await?;

        Ok(Link::new(alias, url.to_string()))
    }

    /// Looks up the link stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown, or
    /// [`AppError::Storage`] on infrastructure failures.
    pub async fn resolve(&self, alias: &str) -> Result<Link, AppError> {
        let url = self.allocator.lookup(alias).await?;

        Ok(Link::new(alias.to_string(), url))
    }

    /// Constructs the full short URL for an alias.
    pub fn short_url(&self, alias: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), alias)
    }
}
