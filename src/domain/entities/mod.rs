//! Core domain entities representing the business data model.
//!
//! The service stores exactly one kind of record: the [`Link`] mapping a
//! short alias to its original URL. Entities are plain data structures
//! without business logic.

pub mod link;

pub use link::Link;
