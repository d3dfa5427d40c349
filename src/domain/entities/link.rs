//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A mapping between a short alias and the original URL.
///
/// The pair is immutable once created: there is no update operation anywhere
/// in the service, and deletion is out of scope. `created_at` is assigned by
/// the durable backend and is not required for correctness, so it stays
/// optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub alias: String,
    pub url: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Creates a new Link with no timestamp attached.
    pub fn new(alias: String, url: String) -> Self {
        Self {
            alias,
            url,
            created_at: None,
        }
    }
}
