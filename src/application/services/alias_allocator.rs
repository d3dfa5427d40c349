//! Alias allocation with collision retry.

use std::sync::Arc;

use tracing::debug;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::alias_generator::generate_alias;

/// Negotiates unique aliases against the link store.
///
/// This is the only component making uniqueness decisions: whether a URL may
/// receive an alias at all, and how candidate collisions are resolved. The
/// store reports collisions; the codec proposes candidates; everything in
/// between lives here.
pub struct AliasAllocator {
    repository: Arc<dyn LinkRepository>,
    alias_length: usize,
    alphabet: String,
    max_attempts: u32,
}

impl AliasAllocator {
    /// Creates a new allocator over the given store.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        alias_length: usize,
        alphabet: String,
        max_attempts: u32,
    ) -> Self {
        Self {
            repository,
            alias_length,
            alphabet,
            max_attempts,
        }
    }

    /// Mints a new alias for `url` and stores the mapping.
    ///
    /// The existence pre-check and the insert are separate store calls, so
    /// two concurrent allocations of the same URL can both pass the check
    /// and end up with two aliases. The window is accepted; alias uniqueness
    /// itself is never at risk because the store rejects duplicate inserts.
    ///
    /// # Errors
    ///
    /// - [`AppError::AlreadyShortened`] when the URL already has an alias
    /// - [`AppError::AllocationExhausted`] when every candidate collided
    /// - [`AppError::Storage`] passed through unchanged, without retry
    ///
    /// [`AppError::DuplicateAlias`] is absorbed by the retry loop and never
    /// returned.
    pub async fn allocate(&self, url: &str) -> Result<String, AppError> {
        if self.repository.url_exists(url).await? {
            return Err(AppError::AlreadyShortened {
                url: url.to_string(),
            });
        }

        for attempt in 1..=self.max_attempts {
            let candidate = generate_alias(self.alias_length, &self.alphabet);

            match self.repository.create(url, &candidate).await {
                Ok(()) => {
                    debug!(alias = %candidate, attempt, "alias allocated");
                    return Ok(candidate);
                }
                Err(AppError::DuplicateAlias { .. }) => {
                    debug!(alias = %candidate, attempt, "alias collision, regenerating");
                }
                Err(other) => return Err(other),
            }
        }

        // Collisions beyond a handful of tries indicate an exhausted
        // namespace or a systemic storage problem; surface it instead of
        // looping forever.
        Err(AppError::AllocationExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Returns the URL stored under `alias`.
    ///
    /// Single pass-through to the store; no retry, no state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown, or
    /// [`AppError::Storage`] on infrastructure failures.
    pub async fn lookup(&self, alias: &str) -> Result<String, AppError> {
        self.repository.get(alias).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::utils::alias_generator::ALIAS_ALPHABET;
    use mockall::Sequence;

    fn allocator(repo: MockLinkRepository) -> AliasAllocator {
        AliasAllocator::new(Arc::new(repo), 10, ALIAS_ALPHABET.to_string(), 10)
    }

    #[tokio::test]
    async fn test_allocate_succeeds_on_first_attempt() {
        let mut repo = MockLinkRepository::new();

        repo.expect_url_exists().times(1).returning(|_| Ok(false));
        repo.expect_create().times(1).returning(|_, _| Ok(()));

        let alias = allocator(repo).allocate("https://example.com").await.unwrap();

        assert_eq!(alias.chars().count(), 10);
        assert!(alias.chars().all(|c| ALIAS_ALPHABET.contains(c)));
    }

    #[tokio::test]
    async fn test_allocate_rejects_already_shortened_url_without_insert() {
        let mut repo = MockLinkRepository::new();

        repo.expect_url_exists().times(1).returning(|_| Ok(true));
        repo.expect_create().times(0);

        let err = allocator(repo).allocate("https://example.com").await.unwrap_err();

        assert!(matches!(err, AppError::AlreadyShortened { url } if url == "https://example.com"));
    }

    #[tokio::test]
    async fn test_allocate_retries_past_collisions() {
        let mut repo = MockLinkRepository::new();
        let mut seq = Sequence::new();

        repo.expect_url_exists().times(1).returning(|_| Ok(false));

        // First two candidates collide, the third lands. The store must see
        // exactly three create calls.
        repo.expect_create()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_, alias| {
                Err(AppError::DuplicateAlias {
                    alias: alias.to_string(),
                })
            });
        repo.expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let alias = allocator(repo).allocate("https://example.com").await.unwrap();

        assert_eq!(alias.chars().count(), 10);
    }

    #[tokio::test]
    async fn test_allocate_exhausts_after_ten_collisions() {
        let mut repo = MockLinkRepository::new();

        repo.expect_url_exists().times(1).returning(|_| Ok(false));
        repo.expect_create().times(10).returning(|_, alias| {
            Err(AppError::DuplicateAlias {
                alias: alias.to_string(),
            })
        });

        let err = allocator(repo).allocate("https://example.com").await.unwrap_err();

        assert!(matches!(err, AppError::AllocationExhausted { attempts: 10 }));
    }

    #[tokio::test]
    async fn test_allocate_does_not_retry_storage_errors() {
        let mut repo = MockLinkRepository::new();

        repo.expect_url_exists().times(1).returning(|_| Ok(false));
        repo.expect_create()
            .times(1)
            .returning(|_, _| Err(AppError::storage("create", anyhow::anyhow!("connection reset"))));

        let err = allocator(repo).allocate("https://example.com").await.unwrap_err();

        assert!(matches!(err, AppError::Storage { operation: "create", .. }));
    }

    #[tokio::test]
    async fn test_allocate_propagates_precheck_failure_without_insert() {
        let mut repo = MockLinkRepository::new();

        repo.expect_url_exists()
            .times(1)
            .returning(|_| Err(AppError::storage("url_exists", anyhow::anyhow!("timeout"))));
        repo.expect_create().times(0);

        let err = allocator(repo).allocate("https://example.com").await.unwrap_err();

        assert!(matches!(err, AppError::Storage { operation: "url_exists", .. }));
    }

    #[tokio::test]
    async fn test_lookup_passes_through() {
        let mut repo = MockLinkRepository::new();

        repo.expect_get()
            .times(1)
            .returning(|_| Ok("https://example.com".to_string()));

        let url = allocator(repo).lookup("abc123").await.unwrap();

        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_lookup_surfaces_not_found() {
        let mut repo = MockLinkRepository::new();

        repo.expect_get().times(1).returning(|alias| {
            Err(AppError::NotFound {
                alias: alias.to_string(),
            })
        });

        let err = allocator(repo).lookup("zzz999").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { alias } if alias == "zzz999"));
    }
}
