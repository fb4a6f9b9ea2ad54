//! Tick Scheduler
//!
//! Drives a scene: once per period it drains every event that arrived since
//! the previous tick, handles the control events itself, hands the rest to
//! the root element as one batch and flushes the surface.
//!
//! # Control events
//!
//! - `Quit` stops the loop and cancels the shared token so the input task
//!   stops too.
//! - `Reset` resets the root element and blanks the drawable area.
//! - `Resize` engages or releases the resize guard. While the terminal is
//!   smaller than the stage, the drawable area is saved, a warning replaces
//!   it and element updates are held back; input keeps queueing.

use std::time::Duration;

use tokio::sync::mpsc::{self, error::TryRecvError};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::element::Element;
use crate::error::Result;
use crate::events::{Event, SpecialKey};
use crate::geometry::{Rect, Stage};
use crate::region::VirtualRegion;
use crate::style::Style;
use crate::surface::{Surface, SurfaceExt};

/// Hint drawn at the top-left of the overlay row
pub const ADVANCE_HINT: &str = "[SPACE] to advance";

/// Hint drawn at the top-right of the overlay row
pub const RESET_HINT: &str = "[ESCAPE] to title";

/// What the caller should do after a tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep ticking
    Continue,
    /// A quit was requested
    Quit,
}

/// Owns the element tree and the surface it draws on
pub struct Scheduler<S: Surface> {
    root: Box<dyn Element>,
    surface: S,
    stage: Stage,
    held: Vec<Event>,
    resize_saved: Option<VirtualRegion>,
    ticks: u64,
}

impl<S: Surface> Scheduler<S> {
    /// Create a scheduler for `root` drawing on `surface`
    pub fn new(root: Box<dyn Element>, surface: S, stage: Stage) -> Self {
        Self {
            root,
            surface,
            stage,
            held: Vec::new(),
            resize_saved: None,
            ticks: 0,
        }
    }

    /// The surface being drawn on
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give the surface back
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// The root element
    pub fn root(&self) -> &dyn Element {
        self.root.as_ref()
    }

    /// Number of ticks run so far
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Whether the resize guard is holding updates back
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.resize_saved.is_some()
    }

    /// Draw the navigation hints on the overlay row
    pub fn draw_overlay(&mut self) {
        let width = self.stage.width;
        let advance = ADVANCE_HINT.chars().count() as i32;
        let reset = RESET_HINT.chars().count() as i32;

        self.surface
            .draw_text(ADVANCE_HINT, Rect::new(0, 0, advance, 1), Style::OPTION);
        self.surface
            .draw_text(RESET_HINT, Rect::new(width - reset, 0, reset, 1), Style::OPTION);
    }

    /// Clear the surface, draw the overlay and flush
    ///
    /// # Errors
    ///
    /// Returns the surface's I/O error if the flush fails.
    pub fn start(&mut self) -> Result<()> {
        self.surface.clear();
        self.draw_overlay();
        self.surface.flush()?;
        Ok(())
    }

    /// Run one tick over the events received since the previous one
    ///
    /// # Errors
    ///
    /// Returns the surface's I/O error if the flush fails.
    pub fn tick(&mut self, batch: impl IntoIterator<Item = Event>) -> Result<TickOutcome> {
        self.ticks += 1;
        let mut forward = Vec::new();

        let mut queue = std::mem::take(&mut self.held);
        queue.extend(batch);

        for event in queue {
            match event {
                Event::Special(SpecialKey::Quit) => {
                    info!(tick = self.ticks, "quit requested");
                    return Ok(TickOutcome::Quit);
                }
                Event::Resize { width, height } => {
                    let was_suspended = self.is_suspended();
                    self.guard_resize(width, height);
                    if was_suspended && !self.is_suspended() {
                        for held in std::mem::take(&mut self.held) {
                            self.dispatch(held, &mut forward);
                        }
                    }
                }
                _ if self.is_suspended() => self.held.push(event),
                _ => self.dispatch(event, &mut forward),
            }
        }

        if !self.is_suspended() {
            self.root.update(&forward, &mut self.surface);
        }
        self.surface.flush()?;

        Ok(TickOutcome::Continue)
    }

    fn dispatch(&mut self, event: Event, forward: &mut Vec<Event>) {
        if !event.is_control() {
            forward.push(event);
        } else if event == Event::Special(SpecialKey::Reset) {
            self.reset();
        }
    }

    /// Reset the root element and blank the drawable area
    pub fn reset(&mut self) {
        info!(tick = self.ticks, "scene reset");
        self.root.reset(&mut self.surface);
        self.surface.fill_rect(' ', self.stage.drawable());
    }

    fn guard_resize(&mut self, width: i32, height: i32) {
        let too_small = width < self.stage.width || height < self.stage.height;

        if too_small {
            if self.resize_saved.is_some() {
                return;
            }
            let saved = VirtualRegion::capture(&self.surface, self.stage.drawable());
            self.surface.clear();
            self.surface.draw_text(
                &size_warning(self.stage),
                Rect::new(0, 0, width, height),
                Style::NORMAL,
            );
            self.resize_saved = Some(saved);
            warn!(width, height, "terminal below minimum size, scene suspended");
        } else if let Some(saved) = self.resize_saved.take() {
            self.surface.clear();
            self.draw_overlay();
            let drawable = self.stage.drawable();
            saved.restore(&mut self.surface, drawable.x, drawable.y);
            info!(width, height, "terminal size restored, scene resumed");
        } else {
            debug!(width, height, "terminal resized");
        }
    }

    /// Tick every `period` until a quit event arrives or `cancel` fires
    ///
    /// A quit, or every event sender going away, cancels `cancel` on the
    /// way out.
    ///
    /// # Errors
    ///
    /// Returns the surface's I/O error if a flush fails.
    pub async fn run(
        &mut self,
        events: &mut mpsc::UnboundedReceiver<Event>,
        period: Duration,
        cancel: CancellationToken,
    ) -> Result<()> {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(period_ms = period.as_millis() as u64, "scheduler started");

        loop {
            tokio::select! {
                biased;

                _ = cancel.cancelled() => {
                    info!(ticks = self.ticks, "scheduler cancelled");
                    break;
                }

                _ = interval.tick() => {
                    let (batch, closed) = recv_all(events);
                    if self.tick(batch)? == TickOutcome::Quit {
                        cancel.cancel();
                        break;
                    }
                    if closed {
                        warn!(ticks = self.ticks, "input channel closed");
                        cancel.cancel();
                        break;
                    }
                }
            }
        }

        info!(ticks = self.ticks, "scheduler stopped");
        Ok(())
    }
}

/// The message shown while the terminal is too small
#[must_use]
pub fn size_warning(stage: Stage) -> String {
    format!(
        "{}x{} is min size.\nPlease expand your terminal.",
        stage.width, stage.height
    )
}

/// Receive all pending events (non-blocking)
///
/// The flag is set once every sender is gone and the queue is drained.
fn recv_all(rx: &mut mpsc::UnboundedReceiver<Event>) -> (Vec<Event>, bool) {
    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(event) => events.push(event),
            Err(TryRecvError::Empty) => return (events, false),
            Err(TryRecvError::Disconnected) => return (events, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::testing::Spy;
    use crate::element::WaitForNext;
    use crate::surface::MemorySurface;
    use pretty_assertions::assert_eq;

    fn stage() -> Stage {
        Stage::new(30, 6)
    }

    fn scheduler(root: Box<dyn Element>) -> Scheduler<MemorySurface> {
        Scheduler::new(root, MemorySurface::new(30, 6), stage())
    }

    #[test]
    fn test_start_draws_overlay() {
        let mut sched = scheduler(Box::new(WaitForNext::new()));
        sched.start().unwrap();

        let top = sched.surface().row_text(0);
        assert!(top.starts_with(ADVANCE_HINT));
        assert!(top.ends_with(RESET_HINT));
        assert_eq!(sched.surface().pixel(0, 0).style, Style::OPTION);
        assert_eq!(sched.surface().flush_count(), 1);
    }

    #[test]
    fn test_tick_forwards_batch_and_flushes() {
        let (spy, log) = Spy::new(10);
        let mut sched = scheduler(Box::new(spy));

        let outcome = sched
            .tick(vec![Event::Key('a'), Event::Mouse { x: 1, y: 2 }])
            .unwrap();
        assert_eq!(outcome, TickOutcome::Continue);
        assert_eq!(
            log.lock().unwrap().batches,
            vec![vec![Event::Key('a'), Event::Mouse { x: 1, y: 2 }]]
        );
        assert_eq!(sched.surface().flush_count(), 1);
        assert_eq!(sched.ticks(), 1);
    }

    #[test]
    fn test_quit_stops_without_update() {
        let (spy, log) = Spy::new(10);
        let mut sched = scheduler(Box::new(spy));

        let outcome = sched
            .tick(vec![Event::Special(SpecialKey::Quit), Event::Key('a')])
            .unwrap();
        assert_eq!(outcome, TickOutcome::Quit);
        assert_eq!(log.lock().unwrap().updates, 0);
    }

    #[test]
    fn test_reset_is_consumed() {
        let (spy, log) = Spy::new(10);
        let mut sched = scheduler(Box::new(spy));
        sched.surface_mut().fill_rect('#', Rect::new(0, 0, 30, 6));

        sched
            .tick(vec![Event::Key('a'), Event::Special(SpecialKey::Reset)])
            .unwrap();

        let log = log.lock().unwrap();
        assert_eq!(log.resets, 1);
        assert_eq!(log.batches, vec![vec![Event::Key('a')]]);
        // overlay row untouched, drawable area blank
        assert_eq!(sched.surface().row_text(0), "#".repeat(30));
        assert_eq!(sched.surface().row_text(1), " ".repeat(30));
    }

    #[test]
    fn test_resize_guard_round_trip() {
        let (spy, log) = Spy::new(10);
        let mut sched = scheduler(Box::new(spy));
        sched.start().unwrap();
        sched
            .surface_mut()
            .draw_text("lesson text", Rect::new(1, 2, 20, 1), Style::NORMAL);
        let before = sched.surface().text_in(Rect::new(0, 0, 30, 6));

        sched.tick(vec![Event::Resize { width: 25, height: 6 }]).unwrap();
        assert!(sched.is_suspended());
        assert_eq!(sched.surface().row_text(0).trim_end(), "30x6 is min size.");
        assert_eq!(sched.surface().row_text(1).trim_end(), "Please expand your termin");

        // input is held while suspended
        sched.tick(vec![Event::Key('x')]).unwrap();
        assert_eq!(log.lock().unwrap().updates, 0);

        sched.tick(vec![Event::Resize { width: 40, height: 10 }]).unwrap();
        assert!(!sched.is_suspended());
        assert_eq!(sched.surface().text_in(Rect::new(0, 0, 30, 6)), before);

        assert_eq!(log.lock().unwrap().batches, vec![vec![Event::Key('x')]]);
    }

    #[test]
    fn test_shrinking_twice_keeps_first_capture() {
        let mut sched = scheduler(Box::new(WaitForNext::new()));
        sched.start().unwrap();
        let before = sched.surface().text_in(Rect::new(0, 0, 30, 6));

        sched.tick(vec![Event::Resize { width: 20, height: 4 }]).unwrap();
        sched.tick(vec![Event::Resize { width: 10, height: 4 }]).unwrap();
        sched.tick(vec![Event::Resize { width: 30, height: 6 }]).unwrap();

        assert_eq!(sched.surface().text_in(Rect::new(0, 0, 30, 6)), before);
    }

    #[tokio::test]
    async fn test_run_until_quit() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let mut sched = scheduler(Box::new(WaitForNext::new()));

        tx.send(Event::Key(' ')).unwrap();
        tx.send(Event::Special(SpecialKey::Quit)).unwrap();

        sched
            .run(&mut rx, Duration::from_millis(1), cancel.clone())
            .await
            .unwrap();

        assert!(cancel.is_cancelled());
        assert!(!sched.root().done());
    }

    #[tokio::test]
    async fn test_run_stops_on_cancel() {
        let (_tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let mut sched = scheduler(Box::new(WaitForNext::new()));

        let stopper = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            stopper.cancel();
        });

        sched
            .run(&mut rx, Duration::from_millis(1), cancel)
            .await
            .unwrap();
        assert!(sched.ticks() > 0);
    }

    #[tokio::test]
    async fn test_run_stops_when_input_closes() {
        let (spy, log) = Spy::new(10);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let mut sched = scheduler(Box::new(spy));

        tx.send(Event::Key('x')).unwrap();
        drop(tx);

        sched
            .run(&mut rx, Duration::from_millis(1), cancel.clone())
            .await
            .unwrap();

        assert!(cancel.is_cancelled());
        assert_eq!(sched.ticks(), 1);
        assert_eq!(log.lock().unwrap().batches, vec![vec![Event::Key('x')]]);
    }

    #[test]
    fn test_recv_all_reports_closed_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(Event::Key('a')).unwrap();

        assert_eq!(recv_all(&mut rx), (vec![Event::Key('a')], false));
        drop(tx);
        assert_eq!(recv_all(&mut rx), (Vec::new(), true));
    }
}
