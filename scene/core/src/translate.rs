//! Hover Translation
//!
//! Turns marked-up text such as `"What does {shash} spell?"` into styled
//! draw calls plus the popups that appear when the highlighted words are
//! hovered. A delimiter (`{` or `}`) toggles between plain and highlighted
//! runs; every run, empty ones included, becomes one draw call so the
//! offset bookkeeping stays aligned with the source text.
//!
//! Delimiters occupy an index in the source but no cell on screen, so each
//! one pulls the following runs one column left. Newlines and tabs inside a
//! run shift every later run by however far the layout cursor moved.

use std::collections::HashMap;

use crate::geometry::Rect;
use crate::layout::{dimensions, row_rects, TAB_WIDTH};
use crate::style::Style;
use crate::surface::DrawCall;

/// Opens a highlighted run
pub const OPEN: char = '{';

/// Closes a highlighted run
pub const CLOSE: char = '}';

/// A dictionary entry: what the popup says and how the word is colored
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Translation {
    /// Popup text
    pub text: String,
    /// Style of the highlighted word
    pub style: Style,
}

impl Translation {
    /// Create an entry
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A read-only token lookup
///
/// Missing tokens are not an error: they translate to an empty string in
/// the neutral style.
pub trait Dictionary {
    /// Popup text for a token
    fn text(&self, token: &str) -> String;

    /// Style for a token
    fn style(&self, token: &str) -> Style;
}

/// A [`Dictionary`] backed by a map of lowercase tokens
#[derive(Clone, Debug, Default)]
pub struct ReplaceMap {
    entries: HashMap<String, Translation>,
}

impl ReplaceMap {
    /// An empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, builder style
    #[must_use]
    pub fn with(mut self, token: &str, text: impl Into<String>, style: Style) -> Self {
        self.insert(token, Translation::new(text, style));
        self
    }

    /// Add or replace an entry; the token is stored lowercased
    pub fn insert(&mut self, token: &str, translation: Translation) {
        self.entries.insert(token.to_lowercase(), translation);
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, token: &str) -> Option<&Translation> {
        self.entries.get(&token.to_lowercase())
    }
}

impl Dictionary for ReplaceMap {
    fn text(&self, token: &str) -> String {
        self.lookup(token).map(|t| t.text.clone()).unwrap_or_default()
    }

    fn style(&self, token: &str) -> Style {
        self.lookup(token).map(|t| t.style).unwrap_or_default()
    }
}

impl<const N: usize> From<[(&str, Translation); N]> for ReplaceMap {
    fn from(entries: [(&str, Translation); N]) -> Self {
        let mut map = Self::new();
        for (token, translation) in entries {
            map.insert(token, translation);
        }
        map
    }
}

/// Everything needed to build one hover popup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopupSpec {
    /// Text shown in the popup
    pub text: String,
    /// Natural width of the text
    pub width: i32,
    /// Natural height of the text
    pub height: i32,
    /// Screen region that triggers the popup
    pub trigger: Rect,
}

/// Split marked-up `text` into draw calls and popup specs
///
/// Highlighted runs produce one popup per screen row they occupy, all
/// showing the run's translation.
#[must_use]
pub fn tokenize(text: &str, dict: &dyn Dictionary, rect: Rect) -> (Vec<PopupSpec>, Vec<DrawCall>) {
    let chars: Vec<char> = text.chars().collect();
    let mut popups = Vec::new();
    let mut calls = Vec::new();

    let mut start = 0usize;
    let mut highlight = false;
    // Shift applied to the current run; negative draws left of the source index
    let mut offset: i32 = 0;
    // Shift that takes effect once the current run ends (the delimiter's -1 plus
    // whatever newlines and tabs inside the run added)
    let mut next_offset: i32 = -1;

    for i in 0..=chars.len() {
        let ch = chars.get(i).copied();

        match ch {
            None | Some(OPEN | CLOSE) => {
                let run: String = chars[start..i].iter().collect();
                let token = run.to_lowercase();
                let run_offset = start as i32 + offset;

                if highlight {
                    let translation = dict.text(&token);
                    let (width, height) = dimensions(&translation);
                    for trigger in row_rects(&run, rect, run_offset) {
                        popups.push(PopupSpec {
                            text: translation.clone(),
                            width,
                            height,
                            trigger,
                        });
                    }
                }

                calls.push(DrawCall::new(run, rect, run_offset, dict.style(&token)));

                offset += next_offset;
                next_offset = -1;
                start = i + 1;
                highlight = !highlight;
            }
            Some('\n') if rect.width > 0 => {
                let col = (i as i32 + offset + 1 + next_offset) % rect.width;
                if col != 0 {
                    next_offset += rect.width - col;
                }
                next_offset -= 1;
            }
            Some('\t') => next_offset += TAB_WIDTH,
            Some(_) => {}
        }
    }

    (popups, calls)
}
