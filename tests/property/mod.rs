//! Property-based tests

pub mod ident_proptest;
pub mod question_proptest;
