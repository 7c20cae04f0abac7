/**
 * Server Initialization
 *
 * # Initialization Process
 *
 * 1. Pick the user store: PostgreSQL whenever `DATABASE_URL` is set, the
 *    in-memory store only when it is not
 * 2. Build the bcrypt hasher with the configured cost
 * 3. Create the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::{BcryptHasher, MemoryUserStore, PgUserStore, UserStore};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ConfigError, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Error Handling
///
/// - Missing `DATABASE_URL`: users are kept in memory
/// - Malformed `DATABASE_URL`: `ConfigError`
/// - Unreachable database: the app still starts; registrations answer 500
///   until the database is back
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, ConfigError> {
    tracing::info!("Initializing campusburn backend server");

    let users: Arc<dyn UserStore> = match config.database_url.as_deref() {
        Some(url) => Arc::new(PgUserStore::new(load_database(url).await?)),
        None => {
            tracing::warn!("DATABASE_URL not set. Registered users will be kept in memory.");
            Arc::new(MemoryUserStore::new())
        }
    };

    let hasher = Arc::new(BcryptHasher::new(config.bcrypt_cost));
    tracing::info!(bcrypt_cost = hasher.cost(), "Password hasher configured");

    Ok(create_router(AppState::new(users, hasher)))
}
