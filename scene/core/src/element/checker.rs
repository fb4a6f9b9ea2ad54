//! Answer Checking
//!
//! Wraps a [`Checkable`] element together with feedback for a right and a
//! wrong answer. A wrong answer plays its feedback and then lets the
//! learner try again; a right one plays its feedback and finishes.

use tracing::info;

use crate::events::Event;
use crate::surface::Surface;

use super::{Checkable, Element};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Awaiting,
    Right,
    Wrong,
}

/// Lowercase and drop spaces, so `" BaNaNa "` and `"banana"` compare equal
fn normalize(answer: &str) -> String {
    answer.to_lowercase().replace(' ', "")
}

/// Checks a committed answer against an accepted set
pub struct Checker {
    input: Box<dyn Checkable>,
    accepted: Vec<String>,
    right: Box<dyn Element>,
    wrong: Box<dyn Element>,
    phase: Phase,
    done: bool,
}

impl Checker {
    /// Check `input` against any of `accepted`
    pub fn new<S: AsRef<str>>(
        input: Box<dyn Checkable>,
        accepted: &[S],
        right: Box<dyn Element>,
        wrong: Box<dyn Element>,
    ) -> Self {
        Self {
            input,
            accepted: accepted.iter().map(|a| normalize(a.as_ref())).collect(),
            right,
            wrong,
            phase: Phase::Awaiting,
            done: false,
        }
    }

    /// Whether right-answer feedback is playing or has played
    #[must_use]
    pub fn answered_right(&self) -> bool {
        self.phase == Phase::Right || self.done
    }

    /// Whether wrong-answer feedback is playing
    #[must_use]
    pub fn showing_wrong(&self) -> bool {
        self.phase == Phase::Wrong
    }

    fn judge(&mut self) {
        let answer = normalize(&self.input.selection());
        let correct = self.accepted.contains(&answer);
        info!(answer = %answer, correct, "answer checked");
        self.phase = if correct { Phase::Right } else { Phase::Wrong };
    }
}

impl Element for Checker {
    fn update(&mut self, events: &[Event], surface: &mut dyn Surface) {
        if self.done {
            return;
        }

        match self.phase {
            Phase::Right => {
                if self.right.done() {
                    self.phase = Phase::Awaiting;
                    self.done = true;
                    surface.hide_cursor();
                }
                self.right.update(events, surface);
            }
            Phase::Wrong => {
                if self.wrong.done() {
                    self.phase = Phase::Awaiting;
                    self.wrong.reset(surface);
                    self.input.reset(surface);
                } else {
                    self.wrong.update(events, surface);
                }
            }
            Phase::Awaiting => {
                if self.input.done() {
                    self.judge();
                } else {
                    self.input.update(events, surface);
                }
            }
        }
    }

    fn done(&self) -> bool {
        self.done
    }

    fn reset(&mut self, surface: &mut dyn Surface) {
        surface.hide_cursor();
        self.input.reset(surface);
        self.right.reset(surface);
        self.wrong.reset(surface);
        self.phase = Phase::Awaiting;
        self.done = false;
    }
}
