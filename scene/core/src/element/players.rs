//! Composite Players
//!
//! Players own an ordered list of children and decide which of them see
//! each tick's events:
//!
//! - [`ConcurrentPlayer`] drives every child every tick.
//! - [`DiscretePlayer`] drives one child at a time and loops forever.
//! - [`SequentialPlayer`] reveals children one after another and keeps
//!   driving the ones already revealed.

use tracing::debug;

use crate::events::Event;
use crate::surface::Surface;

use super::Element;

/// Plays all children at once
pub struct ConcurrentPlayer {
    elements: Vec<Box<dyn Element>>,
}

impl ConcurrentPlayer {
    /// Create a player over `elements`
    pub fn new(elements: Vec<Box<dyn Element>>) -> Self {
        Self { elements }
    }
}

impl Element for ConcurrentPlayer {
    fn update(&mut self, events: &[Event], surface: &mut dyn Surface) {
        for element in &mut self.elements {
            element.update(events, surface);
        }
    }

    fn done(&self) -> bool {
        self.elements.iter().all(|e| e.done())
    }

    fn reset(&mut self, surface: &mut dyn Surface) {
        for element in &mut self.elements {
            element.reset(surface);
        }
    }
}

/// The active-child index shared by the single-child players
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct CycleIndex {
    current: usize,
    len: usize,
}

impl CycleIndex {
    fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    fn get(&self) -> usize {
        self.current
    }

    fn is_last(&self) -> bool {
        self.current + 1 >= self.len
    }

    /// Move forward one, wrapping to the start
    fn advance_wrapping(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    /// Move forward one, stopping at the last child
    fn advance_saturating(&mut self) {
        if !self.is_last() {
            self.current += 1;
        }
    }

    fn rewind(&mut self) {
        self.current = 0;
    }
}

/// Plays one child at a time, cycling forever
///
/// When the active child finishes, the next tick resets it and moves on to
/// the following child instead of updating. The player itself never
/// finishes.
pub struct DiscretePlayer {
    elements: Vec<Box<dyn Element>>,
    index: CycleIndex,
}

impl DiscretePlayer {
    /// Create a player over `elements`
    pub fn new(elements: Vec<Box<dyn Element>>) -> Self {
        let index = CycleIndex::new(elements.len());
        Self { elements, index }
    }

    /// Index of the active child
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.index.get()
    }
}

impl Element for DiscretePlayer {
    fn update(&mut self, events: &[Event], surface: &mut dyn Surface) {
        let Some(active) = self.elements.get_mut(self.index.get()) else {
            return;
        };

        if active.done() {
            active.reset(surface);
            self.index.advance_wrapping();
            debug!(index = self.index.get(), "discrete player advanced");
        } else {
            active.update(events, surface);
        }
    }

    fn done(&self) -> bool {
        false
    }

    fn reset(&mut self, surface: &mut dyn Surface) {
        self.index.rewind();
        for element in &mut self.elements {
            element.reset(surface);
        }
    }
}

/// Plays children in order, keeping earlier ones live
///
/// Every child up to and including the active one receives each tick's
/// events, so finished children can redraw after something covered them.
/// The player finishes once its last child does.
pub struct SequentialPlayer {
    elements: Vec<Box<dyn Element>>,
    index: CycleIndex,
    done: bool,
}

impl SequentialPlayer {
    /// Create a player over `elements`
    pub fn new(elements: Vec<Box<dyn Element>>) -> Self {
        let index = CycleIndex::new(elements.len());
        Self {
            elements,
            index,
            done: false,
        }
    }

    /// Index of the furthest child reached
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.index.get()
    }
}

impl Element for SequentialPlayer {
    fn update(&mut self, events: &[Event], surface: &mut dyn Surface) {
        let active = self.index.get();
        for element in self.elements.iter_mut().take(active + 1) {
            element.update(events, surface);
        }

        let active_done = self.elements.get(active).map_or(true, |e| e.done());
        if self.done || !active_done {
            return;
        }

        if self.index.is_last() {
            debug!(children = self.elements.len(), "sequence finished");
            self.done = true;
        } else {
            self.index.advance_saturating();
            debug!(index = self.index.get(), "sequence advanced");
        }
    }

    fn done(&self) -> bool {
        self.done
    }

    fn reset(&mut self, surface: &mut dyn Surface) {
        self.index.rewind();
        self.done = false;
        for element in &mut self.elements {
            element.reset(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::testing::Spy;
    use crate::surface::MemorySurface;
    use pretty_assertions::assert_eq;

    fn boxed(spy: Spy) -> Box<dyn Element> {
        Box::new(spy)
    }

    #[test]
    fn test_cycle_index() {
        let mut idx = CycleIndex::new(3);
        idx.advance_wrapping();
        idx.advance_wrapping();
        assert!(idx.is_last());
        idx.advance_wrapping();
        assert_eq!(idx.get(), 0);

        let mut idx = CycleIndex::new(2);
        idx.advance_saturating();
        idx.advance_saturating();
        assert_eq!(idx.get(), 1);
    }

    #[test]
    fn test_concurrent_done_is_and_of_children() {
        let mut s = MemorySurface::new(1, 1);
        let (a, a_log) = Spy::new(1);
        let (b, b_log) = Spy::new(3);
        let mut player = ConcurrentPlayer::new(vec![boxed(a), boxed(b)]);

        player.update(&[Event::Key('x')], &mut s);
        assert!(!player.done());
        player.update(&[], &mut s);
        assert!(!player.done());
        player.update(&[], &mut s);
        assert!(player.done());

        assert_eq!(a_log.lock().unwrap().batches[0], vec![Event::Key('x')]);
        assert_eq!(b_log.lock().unwrap().batches[0], vec![Event::Key('x')]);

        player.reset(&mut s);
        assert!(!player.done());
        assert_eq!(a_log.lock().unwrap().resets, 1);
        assert_eq!(b_log.lock().unwrap().resets, 1);
    }

    #[test]
    fn test_concurrent_empty_is_done() {
        assert!(ConcurrentPlayer::new(Vec::new()).done());
    }

    #[test]
    fn test_discrete_cycles_and_never_finishes() {
        let mut s = MemorySurface::new(1, 1);
        let (a, a_log) = Spy::new(1);
        let (b, b_log) = Spy::new(1);
        let mut player = DiscretePlayer::new(vec![boxed(a), boxed(b)]);

        player.update(&[], &mut s); // a finishes
        assert_eq!(player.active_index(), 0);
        assert!(!player.done());

        player.update(&[], &mut s); // a reset, move to b
        assert_eq!(player.active_index(), 1);
        assert_eq!(a_log.lock().unwrap().resets, 1);
        assert_eq!(b_log.lock().unwrap().updates, 0);

        player.update(&[], &mut s); // b finishes
        player.update(&[], &mut s); // wrap
        assert_eq!(player.active_index(), 0);
        assert_eq!(b_log.lock().unwrap().resets, 1);
        assert!(!player.done());
    }

    #[test]
    fn test_discrete_forwards_only_to_active() {
        let mut s = MemorySurface::new(1, 1);
        let (a, a_log) = Spy::new(5);
        let (b, b_log) = Spy::new(5);
        let mut player = DiscretePlayer::new(vec![boxed(a), boxed(b)]);

        player.update(&[Event::Key('q')], &mut s);
        assert_eq!(a_log.lock().unwrap().updates, 1);
        assert_eq!(b_log.lock().unwrap().updates, 0);

        player.reset(&mut s);
        assert_eq!(player.active_index(), 0);
        assert_eq!(b_log.lock().unwrap().resets, 1);
    }

    #[test]
    fn test_sequential_feeds_all_revealed_children() {
        let mut s = MemorySurface::new(1, 1);
        let (a, a_log) = Spy::new(1);
        let (b, b_log) = Spy::new(2);
        let (c, c_log) = Spy::new(1);
        let mut player = SequentialPlayer::new(vec![boxed(a), boxed(b), boxed(c)]);

        let mut last = 0;
        for tick in 0..10 {
            player.update(&[Event::Key('k')], &mut s);
            let idx = player.active_index();
            assert!(idx >= last && idx <= 2, "tick {tick}: index {idx}");
            last = idx;
        }

        assert!(player.done());
        // a saw every batch, b joined on tick 2, c on tick 4
        assert_eq!(a_log.lock().unwrap().updates, 10);
        assert_eq!(b_log.lock().unwrap().updates, 9);
        assert_eq!(c_log.lock().unwrap().updates, 7);
    }

    #[test]
    fn test_sequential_done_on_tick_last_child_finishes() {
        let mut s = MemorySurface::new(1, 1);
        let (a, _) = Spy::new(1);
        let (b, _) = Spy::new(2);
        let mut player = SequentialPlayer::new(vec![boxed(a), boxed(b)]);

        player.update(&[], &mut s); // a done, index -> 1
        assert_eq!(player.active_index(), 1);
        player.update(&[], &mut s);
        assert!(!player.done());
        player.update(&[], &mut s); // b done
        assert!(player.done());
        assert_eq!(player.active_index(), 1);

        player.reset(&mut s);
        assert!(!player.done());
        assert_eq!(player.active_index(), 0);
    }
}
