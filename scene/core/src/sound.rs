//! Sound Effects
//!
//! Elements play short cues (a typing click, a line-end ding) through this
//! trait. Playback must not block the tick; implementations fire and forget.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A fire-and-forget sound cue
pub trait SoundEffect: Send + Sync {
    /// Start playing; returns immediately
    fn play(&self);
}

/// Plays nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct Silence;

impl SoundEffect for Silence {
    fn play(&self) {}
}

/// Counts how often it was played
///
/// Useful for asserting on sound cues without an audio device.
#[derive(Debug, Default)]
pub struct CountingSound {
    plays: AtomicUsize,
}

impl CountingSound {
    /// A shareable counter starting at zero
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of plays so far
    #[must_use]
    pub fn plays(&self) -> usize {
        self.plays.load(Ordering::Relaxed)
    }
}

impl SoundEffect for CountingSound {
    fn play(&self) {
        self.plays.fetch_add(1, Ordering::Relaxed);
    }
}

/// The pair of cues a typing element uses
#[derive(Clone)]
pub struct TypingSounds {
    /// Played (randomly) per revealed character or typed key
    pub click: Arc<dyn SoundEffect>,
    /// Played on line ends and commits
    pub ding: Arc<dyn SoundEffect>,
}

impl TypingSounds {
    /// Create a pair
    pub fn new(click: Arc<dyn SoundEffect>, ding: Arc<dyn SoundEffect>) -> Self {
        Self { click, ding }
    }

    /// The same effect for both cues
    pub fn uniform(effect: Arc<dyn SoundEffect>) -> Self {
        Self {
            click: Arc::clone(&effect),
            ding: effect,
        }
    }
}

impl std::fmt::Debug for TypingSounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypingSounds").finish_non_exhaustive()
    }
}
