#![allow(dead_code)]

use std::sync::Arc;

use linkcut::application::services::{AliasAllocator, ShortenerService};
use linkcut::domain::repositories::LinkRepository;
use linkcut::infrastructure::persistence::MemoryLinkRepository;
use linkcut::state::AppState;
use linkcut::utils::alias_generator::ALIAS_ALPHABET;

pub const BASE_URL: &str = "https://s.example.com";

/// Builds an application state over a fresh in-memory store.
pub fn create_test_state() -> AppState {
    let repository: Arc<dyn LinkRepository> = Arc::new(MemoryLinkRepository::new());

    let allocator = AliasAllocator::new(repository.clone(), 10, ALIAS_ALPHABET.to_string(), 10);
    let shortener = Arc::new(ShortenerService::new(allocator, BASE_URL.to_string()));

    AppState {
        shortener,
        repository,
    }
}

/// Inserts a link directly into the store, bypassing allocation.
pub async fn prime_link(state: &AppState, alias: &str, url: &str) {
    state.repository.create(url, alias).await.unwrap();
}
