//! Business logic services for the application layer.

pub mod alias_allocator;
pub mod shortener_service;

pub use alias_allocator::AliasAllocator;
pub use shortener_service::ShortenerService;
