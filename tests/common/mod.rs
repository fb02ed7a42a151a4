//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Custom assertion macros
//! - Request and document fixtures

#[macro_use]
pub mod assertions;
pub mod fixtures;
