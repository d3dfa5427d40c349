//! In-memory implementation of the link repository.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Both lookup directions behind one lock.
///
/// The forward and reverse maps must always agree with each other, so they
/// live in a single structure guarded by a single `RwLock`; per-map locks
/// would let `url_exists` observe an alias insert without its reverse entry.
#[derive(Default)]
struct LinkIndex {
    url_by_alias: HashMap<String, String>,
    alias_by_url: HashMap<String, String>,
}

/// Process-local link storage.
///
/// Data is lost when the process exits. Reads take the shared lock and may
/// proceed concurrently; `create` takes the exclusive lock and updates both
/// maps as one unit of work. No await happens while a lock is held, so lock
/// hold times are bounded by the map operations themselves.
#[derive(Default)]
pub struct MemoryLinkRepository {
    index: RwLock<LinkIndex>,
}

impl MemoryLinkRepository {
    /// Creates an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, url: &str, alias: &str) -> Result<(), AppError> {
        let mut index = self.index.write();

        if index.url_by_alias.contains_key(alias) {
            return Err(AppError::DuplicateAlias {
                alias: alias.to_string(),
            });
        }

        index
            .url_by_alias
            .insert(alias.to_string(), url.to_string());
        index
            .alias_by_url
            .insert(url.to_string(), alias.to_string());

        Ok(())
    }

    async fn get(&self, alias: &str) -> Result<String, AppError> {
        self.index
            .read()
            .url_by_alias
            .get(alias)
            .cloned()
            .ok_or_else(|| AppError::NotFound {
                alias: alias.to_string(),
            })
    }

    async fn url_exists(&self, url: &str) -> Result<bool, AppError> {
        Ok(self.index.read().alias_by_url.contains_key(url))
    }
}
