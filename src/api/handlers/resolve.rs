//! Handler for alias resolution endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::resolve::ResolveResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the original URL stored under an alias, as JSON.
///
/// # Endpoint
///
/// `GET /api/resolve/{alias}`
///
/// # Response
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn resolve_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResolveResponse>, AppError> {
    let link = state.shortener.resolve(&alias).await?;

    Ok(Json(ResolveResponse { url: link.url }))
}
