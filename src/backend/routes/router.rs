/**
 * Router Configuration
 *
 * Combines the health route and the form API routes into the final router
 * and applies the CORS layer.
 *
 * # CORS
 *
 * The allow-list comes from configuration. CORS is enforced by browsers:
 * a request carrying an Origin outside the list is rejected client-side
 * because the response lacks the allow headers, while requests without an
 * Origin header (the native client, curl) pass through untouched.
 */
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::backend::forms::handlers;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use crate::shared::api_paths;

/// Create the Axum router with all routes configured
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    let router = Router::new().route(api_paths::HEALTH, axum::routing::get(handlers::health));

    let router = configure_api_routes(router);

    router.layer(cors_layer(allowed_origins)).with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparseable allowed origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
