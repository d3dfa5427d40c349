//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls, candidate generation, and collision handling. Services consume
//! repository traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::alias_allocator::AliasAllocator`] - Alias uniqueness negotiation
//! - [`services::shortener_service::ShortenerService`] - Shorten/resolve facade

pub mod services;
