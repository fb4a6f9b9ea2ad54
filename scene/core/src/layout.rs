//! Text Layout
//!
//! The wrapping rules shared by every text-drawing path: plain draws,
//! progressive reveal, hover segments and popup sizing. Character `i` of a
//! string laid out with `offset` lands at column `(i + offset) % W`, row
//! `(i + offset) / W`; newlines and tabs only move the running offset.
//!
//! Layout is a pure function of `(text, rect, offset)`. Nothing here fails:
//! text that runs past the bottom row is reported as truncated and the
//! caller decides what that means (a typewriter finishes, a draw stops).

use crate::geometry::Rect;

/// Columns a tab advances the layout cursor by
pub const TAB_WIDTH: i32 = 4;

/// One step of the layout cursor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// A visible character at a column/row relative to the layout rect
    Glyph {
        /// Index of the character in the laid-out text
        index: usize,
        /// The character
        ch: char,
        /// Column within the rect
        col: i32,
        /// Row within the rect
        row: i32,
    },
    /// A newline or tab moved the cursor without drawing
    Advance,
    /// The next character would land below the rect; layout is over
    Truncated,
}

/// Walks a string one character at a time, applying the wrapping rules
///
/// A cursor is resumable: the progressive-reveal element keeps one across
/// ticks and takes a single step per tick.
#[derive(Clone, Debug)]
pub struct TextCursor<'a> {
    chars: &'a [char],
    width: i32,
    height: i32,
    index: usize,
    offset: i32,
    truncated: bool,
}

impl<'a> TextCursor<'a> {
    /// Start laying out `chars` inside `rect`, `offset` cells into the flow
    #[must_use]
    pub fn new(chars: &'a [char], rect: Rect, offset: i32) -> Self {
        Self {
            chars,
            width: rect.width,
            height: rect.height,
            index: 0,
            offset,
            truncated: false,
        }
    }

    /// Pick up a layout that was paused after `index` characters with the
    /// running `offset` it had reached
    #[must_use]
    pub fn resume(chars: &'a [char], rect: Rect, index: usize, offset: i32) -> Self {
        Self {
            index,
            ..Self::new(chars, rect, offset)
        }
    }

    /// Index of the next character to lay out
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The running offset, including every newline and tab seen so far
    #[must_use]
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Whether the cursor has consumed all text or hit the bottom
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.truncated || self.index >= self.chars.len()
    }

    /// Take one step; `None` once the text is exhausted or truncated
    pub fn step(&mut self) -> Option<Step> {
        if self.is_finished() {
            return None;
        }
        if self.width <= 0 {
            self.truncated = true;
            return Some(Step::Truncated);
        }

        let ch = self.chars[self.index];
        let pos = self.index as i32 + self.offset;
        let col = pos % self.width;

        match ch {
            '\n' => {
                if col != 0 {
                    self.offset += self.width - col;
                }
                self.offset -= 1;
                self.index += 1;

                let next_row = (self.index as i32 + self.offset) / self.width;
                if next_row >= self.height {
                    self.truncated = true;
                    return Some(Step::Truncated);
                }
                Some(Step::Advance)
            }
            '\t' => {
                self.offset += TAB_WIDTH;
                self.index += 1;
                Some(Step::Advance)
            }
            _ => {
                let row = pos / self.width;
                if row >= self.height {
                    self.truncated = true;
                    return Some(Step::Truncated);
                }
                let index = self.index;
                self.index += 1;
                Some(Step::Glyph {
                    index,
                    ch,
                    col,
                    row,
                })
            }
        }
    }
}

/// Where one visible character lands, relative to the layout rect
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Index of the character in the text
    pub index: usize,
    /// Column within the rect
    pub col: i32,
    /// Row within the rect
    pub row: i32,
}

/// Lay out `text` and return the position of every visible character
///
/// Characters after the first one that would fall below the rect are not
/// returned.
#[must_use]
pub fn positions(text: &str, rect: Rect, offset: i32) -> Vec<Placement> {
    let chars: Vec<char> = text.chars().collect();
    let mut cursor = TextCursor::new(&chars, rect, offset);
    let mut placements = Vec::with_capacity(chars.len());

    while let Some(step) = cursor.step() {
        if let Step::Glyph { index, col, row, .. } = step {
            placements.push(Placement { index, col, row });
        }
    }

    placements
}

/// Natural `(width, height)` of `text` with no wrapping: the longest line
/// (tabs counting [`TAB_WIDTH`]) by the number of lines
#[must_use]
pub fn dimensions(text: &str) -> (i32, i32) {
    let mut width = 0;
    let mut height = 1;
    let mut line = 0;

    for ch in text.chars() {
        match ch {
            '\n' => {
                height += 1;
                width = width.max(line);
                line = 0;
            }
            '\t' => line += TAB_WIDTH,
            _ => line += 1,
        }
    }

    (width.max(line), height)
}

/// The one-row rects, in screen coordinates, that `text` covers when laid
/// out inside `rect` at `offset`
///
/// Each rect spans from the first to the last visible character of its
/// row. Rows below the rect are not included.
#[must_use]
pub fn row_rects(text: &str, rect: Rect, offset: i32) -> Vec<Rect> {
    let mut rects: Vec<Rect> = Vec::new();
    let mut current: Option<(i32, i32, i32)> = None; // (row, first col, last col)

    for p in positions(text, rect, offset) {
        match current {
            Some((row, first, _)) if row == p.row => current = Some((row, first, p.col)),
            _ => {
                if let Some((row, first, last)) = current {
                    rects.push(Rect::new(rect.x + first, rect.y + row, last - first + 1, 1));
                }
                current = Some((p.row, p.col, p.col));
            }
        }
    }
    if let Some((row, first, last)) = current {
        rects.push(Rect::new(rect.x + first, rect.y + row, last - first + 1, 1));
    }

    rects
}
