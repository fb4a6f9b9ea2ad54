//! Multiple Choice

use tracing::debug;

use crate::events::{Event, SpecialKey};
use crate::geometry::Rect;
use crate::layout::dimensions;
use crate::style::Style;
use crate::surface::{DrawCall, Surface};

use super::{Checkable, Element};

/// A vertical list of options with a `> <` selection marker
///
/// Arrow keys move the selection (wrapping at both ends); enter, space or
/// `c` commits it.
#[derive(Debug)]
pub struct Options {
    options: Vec<String>,
    draw_calls: Vec<DrawCall>,
    selected: usize,
    done: bool,
}

impl Options {
    /// Lay the options out top to bottom starting at `rect`'s corner, one
    /// blank row between them
    pub fn new<S: AsRef<str>>(options: &[S], rect: Rect) -> Self {
        let mut row = rect.y;
        let mut draw_calls = Vec::with_capacity(options.len());
        for option in options {
            let option = option.as_ref();
            let (width, height) = dimensions(option);
            draw_calls.push(DrawCall::new(
                option,
                Rect::new(rect.x + 2, row, width, height),
                0,
                Style::NORMAL,
            ));
            row += height + 1;
        }

        Self {
            options: options.iter().map(|o| o.as_ref().to_string()).collect(),
            draw_calls,
            selected: 0,
            done: false,
        }
    }

    /// Index of the highlighted option
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    fn selected_rect(&self) -> Option<Rect> {
        self.draw_calls.get(self.selected).map(|c| c.rect)
    }

    fn draw_markers(&self, surface: &mut dyn Surface, left: char, right: char, style: Style) {
        if let Some(sel) = self.selected_rect() {
            surface.set_content(sel.x - 2, sel.y, left, style);
            surface.set_content(sel.right() + 1, sel.y, right, style);
        }
    }

    fn erase_markers(&self, surface: &mut dyn Surface) {
        self.draw_markers(surface, ' ', ' ', Style::NORMAL);
    }

    fn move_selection(&mut self, by: isize, surface: &mut dyn Surface) {
        let len = self.options.len() as isize;
        if len == 0 {
            return;
        }
        self.erase_markers(surface);
        self.selected = (self.selected as isize + by).rem_euclid(len) as usize;
    }

    fn commit(&mut self) {
        if self.done || self.options.is_empty() {
            return;
        }
        debug!(selected = self.selected, option = %self.options[self.selected], "option committed");
        self.done = true;
    }
}

impl Element for Options {
    fn update(&mut self, events: &[Event], surface: &mut dyn Surface) {
        if self.done {
            return;
        }

        for event in events {
            match event {
                Event::Special(SpecialKey::Up | SpecialKey::Left) => self.move_selection(-1, surface),
                Event::Special(SpecialKey::Down | SpecialKey::Right) => {
                    self.move_selection(1, surface);
                }
                Event::Special(SpecialKey::Enter) | Event::Key(' ' | 'c') => self.commit(),
                _ => {}
            }
            if self.done {
                break;
            }
        }

        for call in &self.draw_calls {
            call.draw(surface);
        }
        self.draw_markers(surface, '>', '<', Style::OPTION);
    }

    fn done(&self) -> bool {
        self.done
    }

    fn reset(&mut self, surface: &mut dyn Surface) {
        self.erase_markers(surface);
        self.done = false;
        self.selected = 0;
        for call in &self.draw_calls {
            surface.fill_rect(' ', call.rect);
        }
    }
}

impl Checkable for Options {
    fn selection(&self) -> String {
        if !self.done {
            return String::new();
        }
        self.options.get(self.selected).cloned().unwrap_or_default()
    }
}
