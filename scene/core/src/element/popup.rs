//! Hover Popups
//!
//! A popup watches mouse events. When the pointer enters its trigger
//! region it shows a bordered text box near the pointer on the following
//! tick, saving whatever the box covers; the next mouse event puts the
//! saved cells back.

use crate::events::Event;
use crate::geometry::Rect;
use crate::region::VirtualRegion;
use crate::style::Style;
use crate::surface::{Surface, SurfaceExt};
use crate::translate::PopupSpec;

use super::Element;

/// Distance between the pointer and the popup's top-left corner
const POINTER_GAP: i32 = 2;

/// A box shown while the pointer hovers a trigger region
#[derive(Debug)]
pub struct PopUp {
    text: String,
    trigger: Rect,
    width: i32,
    height: i32,
    shown: Option<Shown>,
    show_next: bool,
    mx: i32,
    my: i32,
}

#[derive(Debug)]
struct Shown {
    body: Rect,
    saved: VirtualRegion,
}

impl PopUp {
    /// A popup of `width` x `height` showing `text` while `trigger` is hovered
    pub fn new(text: impl Into<String>, width: i32, height: i32, trigger: Rect) -> Self {
        Self {
            text: text.into(),
            trigger,
            width,
            height,
            shown: None,
            show_next: false,
            mx: 0,
            my: 0,
        }
    }

    /// Region that triggers the popup
    #[must_use]
    pub fn trigger(&self) -> Rect {
        self.trigger
    }

    /// The popup body currently on screen, if any
    #[must_use]
    pub fn visible(&self) -> Option<Rect> {
        self.shown.as_ref().map(|s| s.body)
    }

    /// Where the body goes for the stored pointer position, kept on screen
    fn placement(&self, screen_w: i32, screen_h: i32) -> Rect {
        let mut x = self.mx + POINTER_GAP;
        let mut y = self.my + POINTER_GAP;
        if x + self.width >= screen_w {
            x = screen_w - self.width - POINTER_GAP;
        }
        if y + self.height >= screen_h {
            y = screen_h - self.height - POINTER_GAP;
        }
        Rect::new(x, y, self.width, self.height)
    }

    fn show(&mut self, surface: &mut dyn Surface) {
        let (screen_w, screen_h) = surface.size();
        let body = self.placement(screen_w, screen_h);
        let saved = VirtualRegion::capture(surface, body.inflate(1));

        surface.fill_rect(' ', body);
        surface.draw_box_around(body, Style::POPUP_BOX);
        surface.draw_text(&self.text, body, Style::POPUP_BOX);

        self.shown = Some(Shown { body, saved });
    }

    fn hide(&mut self, surface: &mut dyn Surface) {
        if let Some(Shown { body, saved }) = self.shown.take() {
            saved.restore(surface, body.x - 1, body.y - 1);
        }
    }
}

impl From<PopupSpec> for PopUp {
    fn from(spec: PopupSpec) -> Self {
        Self::new(spec.text, spec.width, spec.height, spec.trigger)
    }
}

impl Element for PopUp {
    fn update(&mut self, events: &[Event], surface: &mut dyn Surface) {
        if self.show_next {
            self.show(surface);
            self.show_next = false;
        }

        for event in events {
            if let Event::Mouse { x, y } = *event {
                self.hide(surface);
                self.mx = x;
                self.my = y;
                self.show_next = self.trigger.contains(x, y);
            }
        }
    }

    fn done(&self) -> bool {
        true
    }

    fn reset(&mut self, surface: &mut dyn Surface) {
        self.hide(surface);
        self.show_next = false;
    }
}
