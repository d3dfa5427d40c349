//! Application error taxonomy and HTTP response mapping.
//!
//! Domain errors ([`AppError::AlreadyShortened`], [`AppError::NotFound`],
//! [`AppError::AllocationExhausted`]) describe expected business conditions
//! and map to 4xx/5xx responses with structured JSON bodies. Infrastructure
//! failures are wrapped into [`AppError::Storage`] with the failing operation
//! name and are never retried by callers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Errors produced by the shortening core and its HTTP surface.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request payload failed validation at the transport boundary.
    #[error("invalid request: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// The candidate alias is already taken by another link.
    ///
    /// Internal to the allocation retry loop; absorbed by
    /// [`crate::application::services::AliasAllocator`] and never surfaced
    /// to the transport layer.
    #[error("alias {alias:?} already exists")]
    DuplicateAlias { alias: String },

    /// The URL already has an alias assigned.
    #[error("url already has an alias")]
    AlreadyShortened { url: String },

    /// No link is stored under the requested alias.
    #[error("no link found for alias {alias:?}")]
    NotFound { alias: String },

    /// Every candidate collided; the retry bound was exhausted.
    #[error("failed to allocate a unique alias after {attempts} attempts")]
    AllocationExhausted { attempts: u32 },

    /// Storage or transport failure underneath the repository.
    #[error("storage failure during {operation}")]
    Storage {
        operation: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Wraps an infrastructure failure with the repository operation name.
    pub fn storage(operation: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self::Storage {
            operation,
            source: source.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                "Request validation failed".to_string(),
                serde_json::to_value(&errors).unwrap_or_else(|_| json!({})),
            ),
            AppError::AlreadyShortened { url } => (
                StatusCode::CONFLICT,
                "conflict",
                "URL is already shortened".to_string(),
                json!({ "url": url }),
            ),
            AppError::NotFound { alias } => (
                StatusCode::NOT_FOUND,
                "not_found",
                "Short link not found".to_string(),
                json!({ "alias": alias }),
            ),
            AppError::AllocationExhausted { attempts } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Could not allocate a unique alias".to_string(),
                json!({ "attempts": attempts }),
            ),
            // A collision that escapes the retry loop is a bug in the
            // allocator, not a client error.
            AppError::DuplicateAlias { alias } => {
                tracing::error!(alias = %alias, "unresolved alias collision reached the transport layer");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal error".to_string(),
                    json!({}),
                )
            }
            AppError::Storage { operation, source } => {
                tracing::error!(operation, error = %source, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal error".to_string(),
                    json!({}),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_keeps_operation_context() {
        let err = AppError::storage("create", anyhow::anyhow!("connection reset"));

        assert!(err.to_string().contains("create"));
        match err {
            AppError::Storage { operation, source } => {
                assert_eq!(operation, "create");
                assert_eq!(source.to_string(), "connection reset");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_response_status_mapping() {
        let cases = [
            (
                AppError::AlreadyShortened {
                    url: "https://example.com".to_string(),
                },
                StatusCode::CONFLICT,
            ),
            (
                AppError::NotFound {
                    alias: "zzz999".to_string(),
                },
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::AllocationExhausted { attempts: 10 },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::storage("get", anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
