/**
 * Server Initialization
 *
 * Assembles the Axum application: configuration, store construction, state,
 * and routing.
 *
 * # Initialization Process
 *
 * 1. Load configuration from the environment
 * 2. Construct the MongoDB client and the form store (dependency injection;
 *    the store is created exactly once per process)
 * 3. Build the application state
 * 4. Create the router with CORS applied
 */
use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_store, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application from the environment.
pub async fn create_app() -> Result<Router, BackendError> {
    let config = ServerConfig::from_env();
    create_app_with_config(&config).await
}

/// Create the application from an explicit configuration.
///
/// Split out so tests can wire the app to their own store URI.
pub async fn create_app_with_config(config: &ServerConfig) -> Result<Router, BackendError> {
    tracing::info!("Initializing formcraft backend server");

    let store = connect_store(config).await?;
    let state = AppState::new(store);

    tracing::info!(
        origins = config.allowed_origins.len(),
        "application state initialized"
    );

    Ok(create_router(state, &config.allowed_origins))
}
