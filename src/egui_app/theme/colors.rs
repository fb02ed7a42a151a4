//! Color Constants
//!
//! Palette used across the form screens. A cool slate scheme with a single
//! indigo accent.

use eframe::egui::Color32;

/// Main window background
pub const BG_DARK: Color32 = Color32::from_rgb(0x1E, 0x22, 0x2A);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x16, 0x1A, 0x20);

/// Form card background
pub const CARD_BG: Color32 = Color32::from_rgb(0x28, 0x2E, 0x38);

/// Form card border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0x3A, 0x42, 0x50);

/// Primary accent (buttons, links)
pub const ACCENT: Color32 = Color32::from_rgb(0x7C, 0x8C, 0xF5);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xE8, 0xEA, 0xF0);

/// Secondary text
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9A, 0xA3, 0xB2);

/// Success messages
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x6E);

/// Error and warning messages
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x6A, 0x6A);

/// Marker for required questions and missing-answer highlights
pub const REQUIRED: Color32 = Color32::from_rgb(0xE5, 0x9A, 0x4C);
