//! Presentation layer: pane renderers drawing into the frame buffer.
//!
//! These are thin consumers of the core state - they read the store and
//! the split engine, never mutate them directly.

pub mod detail;
pub mod spinner;
pub mod status;
pub mod table;

use crossterm::style::Color;
use serde_json::Value;

/// Render a record field for display.
///
/// Strings are shown bare (no quotes), missing and null values as a
/// dash, everything else as compact JSON.
pub fn format_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".into(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Background for the selected row (bright purple, inverted text).
pub const SELECTED_BG: Color = Color::Rgb {
    r: 0xA2,
    g: 0x77,
    b: 0xFF,
};

/// Inverted foreground used on the selection background.
pub const SELECTED_FG: Color = Color::Rgb {
    r: 0x12,
    g: 0x12,
    b: 0x1C,
};

/// Muted foreground for labels, dividers, and fallbacks.
pub const MUTED: Color = Color::Rgb {
    r: 0x6E,
    g: 0x6E,
    b: 0x80,
};

/// Accent for sort indicators and the active divider.
pub const ACCENT: Color = Color::Rgb {
    r: 0xA2,
    g: 0x77,
    b: 0xFF,
};
