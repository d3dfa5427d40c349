//! DTOs for the resolve endpoint.

use serde::Serialize;

/// Response carrying the URL stored under a requested alias.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub url: String,
}
