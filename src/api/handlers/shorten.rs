//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened alias for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "alias": "Ab3xYz_09Q",
///   "short_url": "https://s.example.com/Ab3xYz_09Q"
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request** - empty URL
/// - **409 Conflict** - the URL already has an alias
/// - **500 Internal Server Error** - alias space exhausted or storage failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state.shortener.shorten(&payload.url).await?;
    let short_url = state.shortener.short_url(&link.alias);

    Ok(Json(ShortenResponse {
        alias: link.alias,
        short_url,
    }))
}
