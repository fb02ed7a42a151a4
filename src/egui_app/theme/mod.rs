//! Theme for the desktop app

pub mod colors;
