//! Forms backend functionality
//!
//! The form-builder core: data access over the two MongoDB collections,
//! HTTP handlers for the form operations, and record-id generation.

/// Data access layer
pub mod db;

/// HTTP handlers
pub mod handlers;

/// Record identifier generation
pub mod ident;

pub use db::FormStore;
