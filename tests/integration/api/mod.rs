//! API integration tests

pub mod client_test;
pub mod envelope_test;
