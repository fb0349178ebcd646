//! HTTP server initialization and runtime setup.
//!
//! Opens the configured store, wires services, and runs the Axum server until
//! Ctrl-C.

use crate::config::{Config, StoreBackend};
use crate::infrastructure::memory::{InMemoryStore, SeedData};
use crate::routes::app_router;
use crate::state::{AppState, Repositories};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations, or the in-memory store
/// - Query services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The seed file cannot be loaded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repositories = open_repositories(&config).await?;
    let state = AppState::new(repositories, config.query_timeout());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Opens the repositories for the configured backend.
///
/// # Errors
///
/// Returns an error if the database is unreachable, migrations fail, or the
/// seed file is invalid.
pub async fn open_repositories(config: &Config) -> Result<Repositories> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let pool = connect_pool(config).await?;

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Migrations applied");

            Ok(Repositories::postgres(Arc::new(pool)))
        }
        StoreBackend::Memory => {
            let store = match &config.seed_file {
                Some(path) => {
                    let store = SeedData::from_path(path)?.into_store();
                    tracing::info!(seed_file = %path, "In-memory store seeded");
                    store
                }
                None => {
                    tracing::warn!("No SEED_FILE set, starting with an empty catalog");
                    InMemoryStore::default()
                }
            };

            Ok(Repositories::in_memory(Arc::new(store)))
        }
    }
}

/// Creates the PostgreSQL pool from the pool settings in `config`.
///
/// # Errors
///
/// Returns an error if no database URL is configured or the connection fails.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set for the postgres backend")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    Ok(pool)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
