//! Styles and Colors
//!
//! Surface-agnostic cell styling. A surface maps these onto whatever its
//! backend understands; the core only compares them for equality.

use serde::{Deserialize, Serialize};

/// A 24-bit foreground color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl Color {
    /// Create a color from RGB components
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Selection markers and overlay hints
pub const YELLOW: Color = Color::rgb(255, 255, 0);

/// Popup body text
pub const TURQUOISE: Color = Color::rgb(64, 224, 208);

/// Popup border
pub const DARK_TURQUOISE: Color = Color::rgb(0, 206, 209);

/// Letter-level dictionary entries
pub const GOLDENROD: Color = Color::rgb(218, 165, 32);

/// English word entries
pub const PINK: Color = Color::rgb(255, 192, 203);

/// Native word entries
pub const RED: Color = Color::rgb(255, 0, 0);

/// Phrase-level entries
pub const BLUE: Color = Color::rgb(0, 0, 255);

/// How a cell is painted
///
/// `fg == None` means the surface's default foreground.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    /// Foreground color
    pub fg: Option<Color>,
}

impl Style {
    /// The neutral style used for plain text and blanking
    pub const NORMAL: Self = Self { fg: None };

    /// Option markers and overlay hints
    pub const OPTION: Self = Self::fg(YELLOW);

    /// Popup body text
    pub const POPUP: Self = Self::fg(TURQUOISE);

    /// Popup border
    pub const POPUP_BOX: Self = Self::fg(DARK_TURQUOISE);

    /// A style with the given foreground color
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self { fg: Some(color) }
    }
}
