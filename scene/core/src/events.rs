//! Input Events
//!
//! The closed set of inputs the element tree reacts to. A surface converts
//! whatever its backend reports into these; the scheduler batches them per
//! tick and hands the batch to the root element.

use serde::{Deserialize, Serialize};

/// Control keys that carry no printable character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialKey {
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
    /// Delete the previous character
    Backspace,
    /// Commit
    Enter,
    /// Terminate the program
    Quit,
    /// Return the scene to its beginning
    Reset,
}

/// A single input event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A printable character was typed
    Key(char),
    /// The mouse moved or clicked at a cell
    Mouse {
        /// Column
        x: i32,
        /// Row
        y: i32,
    },
    /// A control key was pressed
    Special(SpecialKey),
    /// The terminal changed size
    Resize {
        /// New width in cells
        width: i32,
        /// New height in cells
        height: i32,
    },
}

impl Event {
    /// Whether this event is a press of the given character
    #[must_use]
    pub fn is_key(&self, ch: char) -> bool {
        matches!(self, Self::Key(c) if *c == ch)
    }

    /// Whether this event is consumed by the scheduler rather than elements
    #[must_use]
    pub fn is_control(&self) -> bool {
        matches!(
            self,
            Self::Special(SpecialKey::Quit | SpecialKey::Reset) | Self::Resize { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_key() {
        assert!(Event::Key(' ').is_key(' '));
        assert!(!Event::Key('a').is_key(' '));
        assert!(!Event::Special(SpecialKey::Enter).is_key('\n'));
    }

    #[test]
    fn test_control_events() {
        assert!(Event::Special(SpecialKey::Quit).is_control());
        assert!(Event::Special(SpecialKey::Reset).is_control());
        assert!(Event::Resize { width: 80, height: 24 }.is_control());
        assert!(!Event::Special(SpecialKey::Enter).is_control());
        assert!(!Event::Mouse { x: 1, y: 1 }.is_control());
    }
}
