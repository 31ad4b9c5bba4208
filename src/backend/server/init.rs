/**
 * Server Initialization
 *
 * Builds the Axum application from a `ServerConfig`:
 * 1. Select the credential store (PostgreSQL when `DATABASE_URL` is set,
 *    in-memory otherwise)
 * 2. Build the application state (hasher, token issuer, auth service)
 * 3. Create the router
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::memory::MemoryUserStore;
use crate::backend::auth::passwords::HashError;
use crate::backend::auth::users::{PgUserStore, UserStore};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Startup failures
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("password hasher setup failed: {0}")]
    Hasher(#[from] HashError),
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing userauth server");

    let store = load_store(config).await?;
    let app_state = AppState::new(store, config)?;

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}

async fn load_store(config: &ServerConfig) -> Result<Arc<dyn UserStore>, StartupError> {
    match &config.database_url {
        Some(url) => {
            let pool = load_database(url).await?;
            Ok(Arc::new(PgUserStore::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Users will be kept in memory only.");
            Ok(Arc::new(MemoryUserStore::new()))
        }
    }
}
