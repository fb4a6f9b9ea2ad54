//! Hover Text
//!
//! Marked-up text drawn once, with a popup behind every highlighted word.

use crate::events::Event;
use crate::geometry::Rect;
use crate::surface::{DrawCall, Surface};
use crate::translate::{tokenize, Dictionary};

use super::{Element, PopUp};

/// Text whose highlighted words show translations on hover
#[derive(Debug)]
pub struct HoverText {
    draw_calls: Vec<DrawCall>,
    popups: Vec<PopUp>,
    done: bool,
}

impl HoverText {
    /// Lay out `text` inside `rect`, resolving `{highlighted}` runs through
    /// `dict`
    pub fn new(text: &str, rect: Rect, dict: &dyn Dictionary) -> Self {
        let (specs, draw_calls) = tokenize(text, dict, rect);
        Self {
            draw_calls,
            popups: specs.into_iter().map(PopUp::from).collect(),
            done: false,
        }
    }

    /// The popups, one per highlighted row segment
    #[must_use]
    pub fn popups(&self) -> &[PopUp] {
        &self.popups
    }
}

impl Element for HoverText {
    fn update(&mut self, events: &[Event], surface: &mut dyn Surface) {
        if !self.done {
            for call in &self.draw_calls {
                call.draw(surface);
            }
            self.done = true;
        }

        for popup in &mut self.popups {
            popup.update(events, surface);
        }
    }

    fn done(&self) -> bool {
        self.done
    }

    fn reset(&mut self, surface: &mut dyn Surface) {
        self.done = false;
        for popup in &mut self.popups {
            popup.reset(surface);
        }
        for call in &self.draw_calls {
            surface.fill_rect(' ', call.rect);
        }
    }
}
