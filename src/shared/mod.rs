//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the frontend and backend. These types are used for serialization and
//! communication over the JSON API.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code. All types are designed for serialization
//! and transmission over HTTP, and the document types double as the stored
//! representation in MongoDB (wire field names match the collections).

/// Form document
pub mod form;

/// Question document and question kinds
pub mod question;

/// Uniform API response envelope
pub mod envelope;

/// Typed request/response payloads per endpoint
pub mod requests;

/// Contract message strings
pub mod messages;

/// Endpoint paths shared by router and client
pub mod api_paths;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use envelope::ApiEnvelope;
pub use form::Form;
pub use question::{Question, QuestionKind, MAX_QUESTIONS_PER_FORM};
pub use requests::{
    DeleteFormRequest, FetchFormRequest, HealthStatus, SaveFormData, SaveFormRequest,
    SubmitAnswersRequest,
};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
