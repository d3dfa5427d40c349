//! API route configuration.

use crate::api::handlers::{resolve_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All JSON API routes.
///
/// # Endpoints
///
/// - `POST /shorten`          - Create a shortened alias
/// - `GET  /resolve/{alias}`  - Resolve an alias to its URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/resolve/{alias}", get(resolve_handler))
}
