//! Formcraft - Main Library
//!
//! Formcraft is a form-builder application: users assemble forms from ordered
//! questions, share them for respondents to fill out, and manage the collected
//! answers. Forms and questions are persisted as documents in MongoDB.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between frontend and backend
//!   - Form and question documents, request/response payloads
//!   - The uniform API response envelope
//!   - Contract message strings and endpoint paths
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server exposing one POST endpoint per form operation
//!   - MongoDB-backed data access layer
//!   - CORS allow-list, configuration, error types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Forms list, form editor, and respondent fill-out screens
//!   - Blocking HTTP client over the shared payload types
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - enables the backend modules and the
//!   `formcraft-server` binary. Disable it to build a client-only crate.
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use formcraft::backend::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await.expect("server setup");
//! // Use app with an Axum server
//! # }
//! ```
//!
//! ## Native Desktop App
//!
//! Run the `egui_app` binary; it talks to the server configured via
//! `CLIENT_API_URL`.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
pub mod egui_app;
