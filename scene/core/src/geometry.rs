//! Geometry
//!
//! Integer rectangles used both as draw targets and as hit-test regions.

/// An axis-aligned rectangle of terminal cells
///
/// Coordinates may be negative (a border drawn around a rect at the screen
/// edge), but width and height never are.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// X position (column)
    pub x: i32,
    /// Y position (row)
    pub y: i32,
    /// Width in cells
    pub width: i32,
    /// Height in cells
    pub height: i32,
}

impl Rect {
    /// Create a new rect, clamping negative dimensions to zero
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }

    /// Check if this rect contains a point
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.x <= x && x < self.x + self.width && self.y <= y && y < self.y + self.height
    }

    /// Grow the rect by `by` cells on every side
    #[must_use]
    pub fn inflate(&self, by: i32) -> Self {
        Self::new(
            self.x - by,
            self.y - by,
            self.width + 2 * by,
            self.height + 2 * by,
        )
    }

    /// Whether the rect covers no cells
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive right edge
    #[must_use]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    #[must_use]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Iterate over all cells in this rect, row by row
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (self.y..self.bottom()).flat_map(move |y| (self.x..self.right()).map(move |x| (x, y)))
    }
}

/// The logical canvas a scene is authored against
///
/// Row 0 is reserved for the navigation overlay; everything else is the
/// drawable area that scenes, resets and the resize guard operate on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stage {
    /// Canvas width in cells
    pub width: i32,
    /// Canvas height in cells
    pub height: i32,
}

impl Stage {
    /// Create a stage of the given size
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// The area below the overlay row
    #[must_use]
    pub fn drawable(&self) -> Rect {
        Rect::new(0, 1, self.width, self.height - 1)
    }

    /// A text row inset one cell from the drawable area's top-left corner
    ///
    /// `x` and `y` are relative to the drawable area; the rect extends to
    /// one cell short of the right edge.
    #[must_use]
    pub fn margin_rect(&self, x: i32, y: i32, height: i32) -> Rect {
        let d = self.drawable();
        let left = d.x + x + 1;
        Rect::new(left, d.y + y + 1, d.width - 1 - left, height)
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(79, 20)
    }
}
