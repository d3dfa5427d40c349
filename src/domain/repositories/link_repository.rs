//! Repository trait for link storage.

use crate::error::AppError;
use async_trait::async_trait;

/// Keyed storage for alias→URL mappings, safe for concurrent use.
///
/// The trait owns raw storage atomicity: `create` must behave as one unit of
/// work across both lookup directions, so `get` and `url_exists` can never
/// observe a half-applied insert. Uniqueness *policy* (retrying collisions,
/// pre-checking URLs) belongs to the allocation service, not to
/// implementations of this trait.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link.
    ///
    /// Atomic under races: when two callers insert the same alias
    /// concurrently, exactly one succeeds and the other observes
    /// [`AppError::DuplicateAlias`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateAlias`] if the alias already exists —
    /// the only error callers may branch on. Returns [`AppError::Storage`]
    /// on infrastructure failures; those must not be retried.
    async fn create(&self, url: &str, alias: &str) -> Result<(), AppError>;

    /// Returns the URL stored under `alias`.
    ///
    /// Reflects all completed `create` calls for the same alias
    /// (read-your-writes per key).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has that alias, or
    /// [`AppError::Storage`] on infrastructure failures.
    async fn get(&self, alias: &str) -> Result<String, AppError>;

    /// Reports whether any stored link has this exact URL value.
    ///
    /// The reverse index is updated together with `create`, so a `true`
    /// result always corresponds to a fully inserted link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on infrastructure failures.
    async fn url_exists(&self, url: &str) -> Result<bool, AppError>;
}
