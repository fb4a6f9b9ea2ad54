//! Progressive Text Reveal
//!
//! Draws one character per tick, following the same wrapping rules as a
//! plain draw. Space fast-forwards to the fully revealed text; a second
//! space (or running out of room) finishes the element.

use tracing::trace;

use crate::events::Event;
use crate::geometry::Rect;
use crate::layout::{Step, TextCursor};
use crate::sound::TypingSounds;
use crate::style::Style;
use crate::surface::Surface;

use super::Element;

/// Chance that a revealed character makes a typing click
const CLICK_PROBABILITY: f32 = 0.5;

/// Text revealed one character per tick, optionally with typewriter sounds
#[derive(Debug)]
pub struct SlowText {
    chars: Vec<char>,
    bound: Rect,
    index: usize,
    offset: i32,
    done: bool,
    sounds: Option<TypingSounds>,
    play_sound: bool,
}

impl SlowText {
    /// Silent reveal of `text` inside `bound`
    pub fn new(text: &str, bound: Rect) -> Self {
        Self {
            chars: text.chars().collect(),
            bound,
            index: 0,
            offset: 0,
            done: false,
            sounds: None,
            play_sound: false,
        }
    }

    /// Reveal with a random click per character and a ding at line ends
    pub fn typewriter(text: &str, bound: Rect, sounds: TypingSounds) -> Self {
        Self {
            sounds: Some(sounds),
            play_sound: true,
            ..Self::new(text, bound)
        }
    }

    /// Whether every character has been laid out
    #[must_use]
    pub fn fully_revealed(&self) -> bool {
        self.index >= self.chars.len()
    }

    fn ding(&self) {
        if let (true, Some(sounds)) = (self.play_sound, &self.sounds) {
            sounds.ding.play();
        }
    }

    fn click(&self) {
        if let (true, Some(sounds)) = (self.play_sound, &self.sounds) {
            if rand::random::<f32>() < CLICK_PROBABILITY {
                sounds.click.play();
            }
        }
    }

    fn finish(&mut self) {
        self.done = true;
        self.ding();
    }

    /// Reveal the next character, or finish if there is none
    fn advance(&mut self, surface: &mut dyn Surface) {
        let at_newline = self.chars.get(self.index) == Some(&'\n');
        let mut cursor = TextCursor::resume(&self.chars, self.bound, self.index, self.offset);
        let step = cursor.step();
        self.index = cursor.index();
        self.offset = cursor.offset();

        match step {
            None | Some(Step::Truncated) => self.finish(),
            Some(Step::Advance) if at_newline => self.ding(),
            Some(Step::Advance) => {}
            Some(Step::Glyph { ch, col, row, .. }) => {
                self.click();
                surface.set_content(self.bound.x + col, self.bound.y + row, ch, Style::NORMAL);
            }
        }
    }

    fn fast_forward(&mut self, surface: &mut dyn Surface) {
        trace!(remaining = self.chars.len().saturating_sub(self.index), "fast-forwarding text");
        self.ding();
        self.play_sound = false;
        while !self.done {
            self.advance(surface);
        }
    }
}

impl Element for SlowText {
    fn update(&mut self, events: &[Event], surface: &mut dyn Surface) {
        if self.done {
            return;
        }

        for event in events {
            if !event.is_key(' ') {
                continue;
            }
            if self.fully_revealed() {
                self.done = true;
            } else {
                self.fast_forward(surface);
            }
            return;
        }

        self.advance(surface);
    }

    fn done(&self) -> bool {
        self.done
    }

    fn reset(&mut self, surface: &mut dyn Surface) {
        surface.fill_rect(' ', self.bound);
        self.index = 0;
        self.offset = 0;
        self.done = false;
        self.play_sound = self.sounds.is_some();
    }
}
