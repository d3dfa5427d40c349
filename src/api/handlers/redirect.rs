//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short alias to its original URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.shortener.resolve(&alias).await?;

    debug!(alias = %link.alias, "redirecting");

    Ok(Redirect::temporary(&link.url))
}
