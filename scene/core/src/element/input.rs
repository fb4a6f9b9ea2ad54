//! Free Text Entry

use tracing::debug;

use crate::events::{Event, SpecialKey};
use crate::geometry::Rect;
use crate::sound::TypingSounds;
use crate::style::Style;
use crate::surface::{Surface, SurfaceExt};

use super::{Checkable, Element};

/// A single-line text field committed with enter
#[derive(Debug)]
pub struct TextInput {
    rect: Rect,
    buffer: Vec<char>,
    selection: String,
    cursor: i32,
    done: bool,
    sounds: Option<TypingSounds>,
}

impl TextInput {
    /// A silent input field drawn inside `rect`
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            buffer: Vec::new(),
            selection: String::new(),
            cursor: 0,
            done: false,
            sounds: None,
        }
    }

    /// An input field that clicks per key and dings on commit
    pub fn typewriter(rect: Rect, sounds: TypingSounds) -> Self {
        Self {
            sounds: Some(sounds),
            ..Self::new(rect)
        }
    }

    /// What has been typed so far
    #[must_use]
    pub fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    fn redraw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(' ', self.rect);
        surface.draw_text(&self.text(), self.rect, Style::NORMAL);
        surface.show_cursor(self.rect.x + self.cursor, self.rect.y);
    }

    fn type_char(&mut self, ch: char, surface: &mut dyn Surface) {
        self.selection.clear();
        self.buffer.push(ch);
        if let Some(sounds) = &self.sounds {
            sounds.click.play();
        }
        self.cursor += 1;
        self.redraw(surface);
    }

    fn backspace(&mut self, surface: &mut dyn Surface) {
        self.selection.clear();
        if self.buffer.pop().is_none() {
            return;
        }
        self.cursor -= 1;
        self.redraw(surface);
    }

    fn commit(&mut self) {
        self.selection = self.text();
        if let Some(sounds) = &self.sounds {
            sounds.ding.play();
        }
        debug!(text = %self.selection, "text input committed");
        self.done = true;
    }
}

impl Element for TextInput {
    fn update(&mut self, events: &[Event], surface: &mut dyn Surface) {
        for event in events {
            if self.done {
                break;
            }
            match event {
                Event::Key(ch) => self.type_char(*ch, surface),
                Event::Special(SpecialKey::Backspace) => self.backspace(surface),
                Event::Special(SpecialKey::Enter) => self.commit(),
                _ => {}
            }
        }

        if self.done {
            surface.hide_cursor();
        }
    }

    fn done(&self) -> bool {
        self.done
    }

    fn reset(&mut self, surface: &mut dyn Surface) {
        surface.hide_cursor();
        surface.fill_rect(' ', self.rect);
        self.buffer.clear();
        self.selection.clear();
        self.cursor = 0;
        self.done = false;
    }
}

impl Checkable for TextInput {
    fn selection(&self) -> String {
        self.selection.clone()
    }
}
