//! egui Native Desktop App Module
//!
//! This module provides a native desktop application using egui/eframe
//! that connects to the Axum backend for building, managing, and filling
//! out forms.
//!
//! # Architecture
//!
//! The egui_app module is organized into focused submodules:
//!
//! - **`config`** - Configuration management (server URL, demo mode)
//! - **`forms_api`** - Blocking HTTP client for the form endpoints
//! - **`state`** - Central app state, view switching, in-flight call polling
//! - **`views`** - The three screens: forms list, form editor, form fill
//! - **`theme`** - Color constants
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the egui app:
//! // cargo run --bin egui_app
//! ```

pub mod config;
pub mod forms_api;
pub mod state;
pub mod theme;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use forms_api::FormsApiClient;
pub use state::{AppState, AppView};
