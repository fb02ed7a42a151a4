//! Backend Error Types
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and converted to HTTP responses
//! in `conversion.rs`.
//!
//! # Error Categories
//!
//! - Store faults: any error raised by the MongoDB driver. Reported to the
//!   caller as the generic internal-error message; the driver detail only
//!   appears in the envelope's `error` debug field and in the logs.
//! - Identifier exhaustion: the bounded record-id retry loop ran out of
//!   attempts. With 62^25 candidates this is unreachable in practice; the
//!   variant exists so the loop is total.
//! - Configuration errors: bad environment values discovered at startup.

use thiserror::Error;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Error raised by the document store driver
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// The record-id generator exhausted its retry budget
    #[error("could not allocate a unique record id after {attempts} attempts")]
    IdSpaceExhausted {
        /// How many candidates were tried
        attempts: u32,
    },

    /// Invalid server configuration
    #[error("configuration error: {0}")]
    Config(String),
}
