//! Terminal Bell Sound

use std::io::{self, Write};
use std::sync::Arc;

use scene_core::{Silence, SoundEffect, TypingSounds};

/// Rings the terminal bell
#[derive(Clone, Copy, Debug, Default)]
pub struct BellSound;

impl SoundEffect for BellSound {
    fn play(&self) {
        let mut stdout = io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
            tracing::trace!(error = %e, "bell failed");
        }
    }
}

/// The cue pair for typing elements
///
/// Keystrokes are silent; line ends and commits ring the bell.
pub fn typing_sounds(enabled: bool) -> TypingSounds {
    if enabled {
        TypingSounds::new(Arc::new(Silence), Arc::new(BellSound))
    } else {
        TypingSounds::uniform(Arc::new(Silence))
    }
}
