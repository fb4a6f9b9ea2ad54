//! Main Application
//!
//! Wires the headless scene engine to a real terminal:
//! - crossterm input flows through an unbounded channel
//! - the scheduler ticks the lesson at the configured period
//! - a shared cancellation token stops both sides on quit

use std::io;

use crossterm::event::{Event as TermEvent, EventStream};
use futures::Stream;
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use scene_core::{Event, SceneConfig, Scheduler};

use crate::input::spawn_pump;
use crate::lesson;
use crate::sound::typing_sounds;
use crate::surface::TerminalSurface;

/// Run the lesson on crossterm input until the learner quits
///
/// Returns the terminal so the caller can restore it.
pub async fn run<B: Backend>(
    config: &SceneConfig,
    terminal: Terminal<B>,
) -> anyhow::Result<Terminal<B>> {
    run_with_input(config, terminal, EventStream::new()).await
}

/// Run the lesson on the given stream of terminal notifications
pub async fn run_with_input<B, S>(
    config: &SceneConfig,
    terminal: Terminal<B>,
    input: S,
) -> anyhow::Result<Terminal<B>>
where
    B: Backend,
    S: Stream<Item = io::Result<TermEvent>> + Unpin + Send + 'static,
{
    let size = terminal.size()?;
    let stage = config.stage;

    let sounds = typing_sounds(config.sound_enabled);
    let root = lesson::build(stage, &sounds);
    let mut scheduler = Scheduler::new(root, TerminalSurface::new(terminal, stage), stage);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();

    // The first resize event arrives only when the window changes, so seed
    // the guard with the size we start at.
    if tx
        .send(Event::Resize {
            width: i32::from(size.width),
            height: i32::from(size.height),
        })
        .is_err()
    {
        warn!("event channel closed before start");
    }

    let input = spawn_pump(input, tx, cancel.clone());

    info!(
        width = stage.width,
        height = stage.height,
        tick_ms = config.tick.as_millis() as u64,
        sound = config.sound_enabled,
        "lesson starting"
    );

    scheduler.start()?;
    let result = scheduler.run(&mut rx, config.tick, cancel.clone()).await;

    cancel.cancel();
    if let Err(e) = input.await {
        warn!(error = %e, "input task ended abnormally");
    }

    result?;
    Ok(scheduler.into_surface().into_terminal())
}
