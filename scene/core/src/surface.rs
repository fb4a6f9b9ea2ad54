//! Render Surface
//!
//! The capability set the engine needs from a display: cell-addressed
//! reads and writes, a text cursor, and a flush. The terminal driver lives
//! outside this crate; [`MemorySurface`] is the headless implementation used
//! by tests and tooling.

use std::io;

use crate::geometry::Rect;
use crate::layout::{Step, TextCursor};
use crate::style::Style;

/// The content of one cell: a base character, any combining marks stacked
/// on it, and its style
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Base character
    pub main: char,
    /// Combining marks, in order
    pub combining: Vec<char>,
    /// Cell style
    pub style: Style,
}

impl Pixel {
    /// A pixel with no combining marks
    #[must_use]
    pub fn new(main: char, style: Style) -> Self {
        Self {
            main,
            combining: Vec::new(),
            style,
        }
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Self::new(' ', Style::NORMAL)
    }
}

/// A cell grid the engine can draw on
///
/// Writes outside the surface are ignored and reads outside it return a
/// blank pixel; drawing code never has to bounds-check.
pub trait Surface {
    /// Drawable width and height in cells
    fn size(&self) -> (i32, i32);

    /// Read a cell
    fn pixel(&self, x: i32, y: i32) -> Pixel;

    /// Write a cell
    fn set_pixel(&mut self, x: i32, y: i32, pixel: Pixel);

    /// Show the text cursor at a cell
    fn show_cursor(&mut self, x: i32, y: i32);

    /// Hide the text cursor
    fn hide_cursor(&mut self);

    /// Blank every cell
    fn clear(&mut self);

    /// Push pending changes to the physical display
    ///
    /// # Errors
    ///
    /// Returns the backend's I/O error if the display cannot be written.
    fn flush(&mut self) -> io::Result<()>;

    /// Write a single character with no combining marks
    fn set_content(&mut self, x: i32, y: i32, ch: char, style: Style) {
        self.set_pixel(x, y, Pixel::new(ch, style));
    }

    /// Fill a rect with a character in the neutral style
    fn fill_rect(&mut self, ch: char, rect: Rect) {
        for (x, y) in rect.cells() {
            self.set_content(x, y, ch, Style::NORMAL);
        }
    }
}

/// Text drawing on top of the raw cell operations
pub trait SurfaceExt: Surface {
    /// Lay `text` out inside `rect` starting at column 0
    fn draw_text(&mut self, text: &str, rect: Rect, style: Style) {
        self.draw_text_offset(text, rect, 0, style);
    }

    /// Lay `text` out inside `rect`, starting `offset` cells into the
    /// wrapped flow; characters past the bottom row are dropped
    fn draw_text_offset(&mut self, text: &str, rect: Rect, offset: i32, style: Style) {
        let chars: Vec<char> = text.chars().collect();
        let mut cursor = TextCursor::new(&chars, rect, offset);
        while let Some(step) = cursor.step() {
            match step {
                Step::Glyph { ch, col, row, .. } => {
                    self.set_content(rect.x + col, rect.y + row, ch, style);
                }
                Step::Advance => {}
                Step::Truncated => break,
            }
        }
    }

    /// Draw a one-cell border just outside `rect`
    fn draw_box_around(&mut self, rect: Rect, style: Style) {
        let (left, top) = (rect.x - 1, rect.y - 1);
        let (right, bottom) = (rect.right(), rect.bottom());

        self.set_content(left, top, '•', style);
        self.set_content(right, top, '•', style);
        self.set_content(left, bottom, '•', style);
        self.set_content(right, bottom, '•', style);

        for x in rect.x..right {
            self.set_content(x, top, '-', style);
            self.set_content(x, bottom, '-', style);
        }
        for y in rect.y..bottom {
            self.set_content(left, y, '|', style);
            self.set_content(right, y, '|', style);
        }
    }
}

impl<S: Surface + ?Sized> SurfaceExt for S {}

/// A positioned, styled text-drawing instruction
///
/// Replaying a draw call against a surface is idempotent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawCall {
    /// Text to lay out
    pub text: String,
    /// Layout rect
    pub rect: Rect,
    /// Starting offset into the wrapped flow
    pub offset: i32,
    /// Style for every glyph
    pub style: Style,
}

impl DrawCall {
    /// Create a draw call
    pub fn new(text: impl Into<String>, rect: Rect, offset: i32, style: Style) -> Self {
        Self {
            text: text.into(),
            rect,
            offset,
            style,
        }
    }

    /// Draw onto a surface
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_text_offset(&self.text, self.rect, self.offset, self.style);
    }
}

/// An in-memory surface
///
/// Keeps a full cell grid plus cursor state and counts flushes, which makes
/// it suitable for asserting on exactly what an element drew.
#[derive(Clone, Debug)]
pub struct MemorySurface {
    width: i32,
    height: i32,
    cells: Vec<Pixel>,
    cursor: Option<(i32, i32)>,
    flushes: usize,
}

impl MemorySurface {
    /// Create a blank surface
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![Pixel::default(); (width * height) as usize],
            cursor: None,
            flushes: 0,
        }
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    /// Current cursor position, if shown
    #[must_use]
    pub fn cursor(&self) -> Option<(i32, i32)> {
        self.cursor
    }

    /// Number of flushes so far
    #[must_use]
    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    /// The base characters of one row
    #[must_use]
    pub fn row_text(&self, y: i32) -> String {
        (0..self.width).map(|x| self.pixel(x, y).main).collect()
    }

    /// The base characters of a rect, one line per row, trailing blanks kept
    #[must_use]
    pub fn text_in(&self, rect: Rect) -> Vec<String> {
        (rect.y..rect.bottom())
            .map(|y| (rect.x..rect.right()).map(|x| self.pixel(x, y).main).collect())
            .collect()
    }

    /// Change the surface size, keeping the overlapping content
    pub fn resize(&mut self, width: i32, height: i32) {
        let mut next = Self::new(width, height);
        for y in 0..next.height.min(self.height) {
            for x in 0..next.width.min(self.width) {
                next.set_pixel(x, y, self.pixel(x, y));
            }
        }
        next.cursor = self.cursor;
        next.flushes = self.flushes;
        *self = next;
    }
}

impl Surface for MemorySurface {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn pixel(&self, x: i32, y: i32) -> Pixel {
        self.index_of(x, y)
            .map(|i| self.cells[i].clone())
            .unwrap_or_default()
    }

    fn set_pixel(&mut self, x: i32, y: i32, pixel: Pixel) {
        if let Some(i) = self.index_of(x, y) {
            self.cells[i] = pixel;
        }
    }

    fn show_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Some((x, y));
    }

    fn hide_cursor(&mut self) {
        self.cursor = None;
    }

    fn clear(&mut self) {
        self.cells.fill(Pixel::default());
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
