//! Virtual Regions
//!
//! In-memory snapshots of a rectangular area of a surface. A popup captures
//! the cells it is about to cover and puts them back when dismissed; the
//! resize guard captures the whole drawable area before replacing it with a
//! warning.
//!
//! A region is owned by whoever captured it and is consumed by the restore.

use crate::geometry::Rect;
use crate::surface::{Pixel, Surface};

/// A cell that differs between two regions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Difference {
    /// Column within the region
    pub x: i32,
    /// Row within the region
    pub y: i32,
    /// The pixel as it is in the region `diff` was called on
    pub pixel: Pixel,
}

/// A captured grid of pixels
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualRegion {
    rows: Vec<Vec<Pixel>>,
}

impl VirtualRegion {
    /// Copy every cell of `rect` off the surface
    #[must_use]
    pub fn capture(surface: &dyn Surface, rect: Rect) -> Self {
        let rows = (0..rect.height)
            .map(|y| {
                (0..rect.width)
                    .map(|x| surface.pixel(rect.x + x, rect.y + y))
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Width in cells
    #[must_use]
    pub fn width(&self) -> i32 {
        self.rows.first().map_or(0, |r| r.len() as i32)
    }

    /// Height in cells
    #[must_use]
    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    /// The pixel at a region-relative cell
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<&Pixel> {
        if x < 0 || y < 0 {
            return None;
        }
        self.rows.get(y as usize)?.get(x as usize)
    }

    /// Write every captured cell back with its top-left corner at `(x, y)`
    pub fn restore(self, surface: &mut dyn Surface, x: i32, y: i32) {
        for (dy, row) in self.rows.into_iter().enumerate() {
            for (dx, pixel) in row.into_iter().enumerate() {
                surface.set_pixel(x + dx as i32, y + dy as i32, pixel);
            }
        }
    }

    /// Every cell of `self` whose pixel is not the same in `other`
    ///
    /// Cells `other` does not have count as different.
    #[must_use]
    pub fn diff(&self, other: &VirtualRegion) -> Vec<Difference> {
        let mut differences = Vec::new();
        for (y, row) in self.rows.iter().enumerate() {
            for (x, pixel) in row.iter().enumerate() {
                let (x, y) = (x as i32, y as i32);
                if other.pixel(x, y) != Some(pixel) {
                    differences.push(Difference {
                        x,
                        y,
                        pixel: pixel.clone(),
                    });
                }
            }
        }
        differences
    }

    /// Same dimensions and the same pixel in every cell
    #[must_use]
    pub fn equals(&self, other: &VirtualRegion) -> bool {
        self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;
    use crate::surface::{MemorySurface, SurfaceExt};
    use pretty_assertions::assert_eq;

    fn painted() -> MemorySurface {
        let mut s = MemorySurface::new(8, 4);
        s.draw_text("abcdefgh", Rect::new(0, 0, 8, 1), Style::NORMAL);
        s.draw_text("ijkl", Rect::new(2, 1, 4, 1), Style::OPTION);
        s.set_pixel(
            3,
            2,
            Pixel {
                main: 'e',
                combining: vec!['\u{301}'],
                style: Style::POPUP,
            },
        );
        s
    }

    #[test]
    fn test_capture_restore_round_trip() {
        let mut s = painted();
        let before = s.clone();
        let rect = Rect::new(1, 0, 5, 3);

        let region = VirtualRegion::capture(&s, rect);
        s.fill_rect('#', rect);
        s.draw_box_around(Rect::new(2, 1, 2, 1), Style::POPUP_BOX);
        region.restore(&mut s, rect.x, rect.y);

        for (x, y) in rect.cells() {
            assert_eq!(s.pixel(x, y), before.pixel(x, y), "cell ({x}, {y})");
        }
    }

    #[test]
    fn test_capture_dimensions() {
        let s = painted();
        let region = VirtualRegion::capture(&s, Rect::new(0, 0, 3, 2));
        assert_eq!((region.width(), region.height()), (3, 2));
        assert_eq!(region.pixel(2, 0).map(|p| p.main), Some('c'));
        assert_eq!(region.pixel(3, 0), None);
    }

    #[test]
    fn test_diff_reports_changed_cells() {
        let mut s = painted();
        let rect = Rect::new(0, 0, 4, 3);
        let a = VirtualRegion::capture(&s, rect);

        s.set_content(1, 0, 'z', Style::NORMAL);
        s.set_content(3, 1, 'j', Style::NORMAL); // same char, different style
        let b = VirtualRegion::capture(&s, rect);

        let diff = b.diff(&a);
        let cells: Vec<(i32, i32, char)> = diff.iter().map(|d| (d.x, d.y, d.pixel.main)).collect();
        assert_eq!(cells, vec![(1, 0, 'z'), (3, 1, 'j')]);
        assert!(!a.equals(&b));
    }

    #[test]
    fn test_combining_marks_participate_in_equality() {
        let mut s = painted();
        let rect = Rect::new(3, 2, 1, 1);
        let a = VirtualRegion::capture(&s, rect);
        s.set_content(3, 2, 'e', Style::POPUP);
        let b = VirtualRegion::capture(&s, rect);

        assert!(!a.equals(&b));
        assert_eq!(a.diff(&b).len(), 1);
    }

    #[test]
    fn test_equal_captures() {
        let s = painted();
        let rect = Rect::new(0, 0, 8, 4);
        let a = VirtualRegion::capture(&s, rect);
        let b = VirtualRegion::capture(&s, rect);
        assert!(a.equals(&b));
        assert!(a.diff(&b).is_empty());
    }
}
