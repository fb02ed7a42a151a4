//! Backend error types
//!
//! Typed errors for the server side plus their conversion to HTTP responses.
//! Per the API contract, faults never surface as non-200 status codes: the
//! conversion emits the generic internal-error envelope instead.

pub mod conversion;
pub mod types;

pub use types::BackendError;
