//! Route configuration

/// Form API routes
pub mod api_routes;

/// Router assembly and CORS
pub mod router;
