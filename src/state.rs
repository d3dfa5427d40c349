//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::{AliasAllocator, ShortenerService};
use crate::config::Config;
use crate::domain::repositories::LinkRepository;

/// Shared state cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    /// Kept alongside the facade for health probes.
    pub repository: Arc<dyn LinkRepository>,
}

impl AppState {
    /// Wires the service stack on top of the selected repository.
    pub fn new(repository: Arc<dyn LinkRepository>, config: &Config) -> Self {
        let allocator = AliasAllocator::new(
            repository.clone(),
            config.alias_length,
            config.alias_alphabet.clone(),
            config.alias_max_retries,
        );
        let shortener = Arc::new(ShortenerService::new(allocator, config.base_url.clone()));

        Self {
            shortener,
            repository,
        }
    }
}
