//! Animation Elements
//!
//! Every piece of a scene is an [`Element`]: a small state machine that is
//! advanced once per tick with the batch of events that arrived since the
//! previous tick. Leaves draw; composites decide which children get the
//! batch.
//!
//! # Variants
//!
//! | Element | Kind | Finishes when |
//! |---------|------|---------------|
//! | [`WaitForNext`] | leaf | space is pressed |
//! | [`SlowText`] | leaf | text is revealed and space is pressed |
//! | [`TextInput`] | leaf, checkable | enter is pressed |
//! | [`Options`] | leaf, checkable | an option is committed |
//! | [`PopUp`] | leaf | always finished |
//! | [`HoverText`] | leaf | after its first draw |
//! | [`ConcurrentPlayer`] | composite | all children finished |
//! | [`DiscretePlayer`] | composite | never |
//! | [`SequentialPlayer`] | composite | the last child finished |
//! | [`Checker`] | wrapper | the right answer was given and acknowledged |

mod checker;
mod hover;
mod input;
mod options;
mod players;
mod popup;
mod slow_text;
mod wait;

pub use checker::Checker;
pub use hover::HoverText;
pub use input::TextInput;
pub use options::Options;
pub use players::{ConcurrentPlayer, DiscretePlayer, SequentialPlayer};
pub use popup::PopUp;
pub use slow_text::SlowText;
pub use wait::WaitForNext;

use crate::events::Event;
use crate::surface::Surface;

/// A unit of animation or interaction
///
/// `update` must never block: it runs on the scheduler's tick and draws
/// directly onto the surface it is handed.
pub trait Element: Send {
    /// Advance one tick with the events received since the last one
    fn update(&mut self, events: &[Event], surface: &mut dyn Surface);

    /// Whether the element reached its final presentation state
    fn done(&self) -> bool;

    /// Return to the initial state
    ///
    /// Drawn content is not necessarily erased; callers that need a blank
    /// surface clear it themselves.
    fn reset(&mut self, surface: &mut dyn Surface);
}

/// An element that produces a committed answer
pub trait Checkable: Element {
    /// The committed text; empty until the element is done
    fn selection(&self) -> String;
}

impl<E: Element + ?Sized> Element for Box<E> {
    fn update(&mut self, events: &[Event], surface: &mut dyn Surface) {
        (**self).update(events, surface);
    }

    fn done(&self) -> bool {
        (**self).done()
    }

    fn reset(&mut self, surface: &mut dyn Surface) {
        (**self).reset(surface);
    }
}
