//! Backend Module
//!
//! This module contains all server-side code for the formcraft application:
//! an Axum HTTP server exposing the form operations as POST JSON endpoints
//! backed by two MongoDB collections.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - configuration, store construction, application state,
//!   router assembly
//! - **`routes`** - route tables and the CORS layer
//! - **`forms`** - the form-builder core: data access layer, HTTP handlers,
//!   record-id generation
//! - **`error`** - backend error types and their response conversion
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Error Handling
//!
//! Handlers return `Result<Json<ApiEnvelope<_>>, BackendError>`; logical
//! failures (validation, not-found) travel inside a successful envelope
//! while store faults bubble out as `BackendError` and are converted to the
//! generic internal-error envelope. Either way the status code is 200.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Form operations: data access and handlers
pub mod forms;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use forms::FormStore;
pub use server::create_app;
