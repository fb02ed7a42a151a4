/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables and
 * constructs the MongoDB-backed form store.
 *
 * # Configuration Sources
 *
 * Everything comes from the environment (a `.env` file is loaded by the
 * binary before this runs), with local-development defaults:
 *
 * - `MONGO_URI` - store connection string (default `mongodb://127.0.0.1:27017`)
 * - `MONGO_DB` - store database name (default `formcraft`)
 * - `SERVER_PORT` - listening port (default 3000)
 * - `ALLOWED_ORIGINS` - comma-separated CORS allow-list (default empty)
 *
 * # Error Handling
 *
 * Only an unparseable connection string fails startup. The MongoDB client
 * connects lazily, so an unreachable store does not prevent the server from
 * coming up; individual requests report store faults through the envelope.
 */
use mongodb::Client;

use crate::backend::error::BackendError;
use crate::backend::forms::FormStore;

/// Environment-driven server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Store connection string
    pub mongo_uri: String,
    /// Store database name
    pub db_name: String,
    /// Listening port
    pub port: u16,
    /// Origins allowed by CORS; empty means browsers are locked out
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Read the configuration from the environment.
    pub fn from_env() -> Self {
        let mongo_uri = std::env::var("MONGO_URI")
            .unwrap_or_else(|_| "mongodb://127.0.0.1:27017".to_string());
        let db_name = std::env::var("MONGO_DB").unwrap_or_else(|_| "formcraft".to_string());
        let port = std::env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .unwrap_or(3000);
        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        Self {
            mongo_uri,
            db_name,
            port,
            allowed_origins,
        }
    }
}

/// Construct the form store from the configuration.
///
/// The client is created once here and injected into the application state;
/// it maintains its own connection pool internally.
pub async fn connect_store(config: &ServerConfig) -> Result<FormStore, BackendError> {
    let client = Client::with_uri_str(&config.mongo_uri).await?;
    tracing::info!(db = %config.db_name, "store client constructed");
    Ok(FormStore::new(client, &config.db_name))
}
