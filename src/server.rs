//! HTTP server initialization and runtime setup.
//!
//! Handles storage backend selection, database connections, migrations, and
//! Axum server lifecycle.

use crate::config::{Config, StorageBackend};
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{MemoryLinkRepository, PgLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The configured link store (in-memory, or PostgreSQL with migrations)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails after all attempts
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository: Arc<dyn LinkRepository> = match config.storage_backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory link store");
            Arc::new(MemoryLinkRepository::new())
        }
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres backend")?;

            let pool = connect_with_retry(database_url, &config).await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;

            Arc::new(PgLinkRepository::new(Arc::new(pool)))
        }
    };

    let state = AppState::new(repository, &config);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

/// Connects to PostgreSQL with a fixed-interval retry schedule.
///
/// The database frequently comes up later than the service in containerized
/// deployments, so startup tolerates a bounded number of failed attempts.
async fn connect_with_retry(database_url: &str, config: &Config) -> Result<PgPool> {
    let strategy =
        FixedInterval::from_millis(5_000).take(config.db_connect_attempts as usize - 1);

    Retry::spawn(strategy, || async {
        PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .connect(database_url)
            .await
            .inspect_err(|e| tracing::warn!("Database connection attempt failed: {e}"))
    })
    .await
    .with_context(|| {
        format!(
            "failed to connect to PostgreSQL after {} attempts",
            config.db_connect_attempts
        )
    })
}
