//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// The URL is stored verbatim; the core intentionally does not check it is a
/// well-formed URI, only that something was submitted.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,
}

/// Response carrying the assigned alias.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub alias: String,
    pub short_url: String,
}
