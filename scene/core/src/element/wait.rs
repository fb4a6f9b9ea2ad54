//! Wait for the learner to press space

use crate::events::Event;
use crate::surface::Surface;

use super::Element;

/// Blocks a sequence until space is pressed
#[derive(Clone, Debug, Default)]
pub struct WaitForNext {
    done: bool,
}

impl WaitForNext {
    /// Create a waiting element
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Element for WaitForNext {
    fn update(&mut self, events: &[Event], _surface: &mut dyn Surface) {
        if events.iter().any(|e| e.is_key(' ')) {
            self.done = true;
        }
    }

    fn done(&self) -> bool {
        self.done
    }

    fn reset(&mut self, _surface: &mut dyn Surface) {
        self.done = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::SpecialKey;
    use crate::surface::MemorySurface;

    #[test]
    fn test_space_finishes() {
        let mut s = MemorySurface::new(4, 4);
        let mut wait = WaitForNext::new();

        wait.update(&[], &mut s);
        wait.update(&[Event::Key('x'), Event::Special(SpecialKey::Enter)], &mut s);
        assert!(!wait.done());

        wait.update(&[Event::Key('x'), Event::Key(' ')], &mut s);
        assert!(wait.done());

        // stays done
        wait.update(&[], &mut s);
        assert!(wait.done());

        wait.reset(&mut s);
        assert!(!wait.done());
    }
}
