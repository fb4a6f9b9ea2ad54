//! Theme and Colors
//!
//! Maps the engine's surface-agnostic styles onto ratatui styles.

use ratatui::style::{Color, Style as TuiStyle};

use scene_core::{style::Color as SceneColor, Style};

/// The ratatui style for a scene style
pub fn to_tui(style: Style) -> TuiStyle {
    match style.fg {
        Some(SceneColor { r, g, b }) => TuiStyle::default().fg(Color::Rgb(r, g, b)),
        None => TuiStyle::default(),
    }
}

/// The scene style for a cell foreground
///
/// Only 24-bit colors round-trip; anything else reads back as the default
/// foreground.
pub fn from_tui(fg: Color) -> Style {
    match fg {
        Color::Rgb(r, g, b) => Style::fg(SceneColor::rgb(r, g, b)),
        _ => Style::NORMAL,
    }
}
