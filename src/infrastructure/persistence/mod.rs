//! Link repository implementations.
//!
//! Two interchangeable backends, selected at startup via
//! [`crate::config::Config::storage_backend`]:
//!
//! - [`MemoryLinkRepository`] - process-local maps, for development and tests
//! - [`PgLinkRepository`] - PostgreSQL via SQLx, for durable deployments

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
