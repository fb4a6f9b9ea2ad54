//! Input Pipeline
//!
//! A background task reads crossterm's event stream, converts each
//! notification into a scene [`Event`] and queues it for the scheduler.
//! The task ends when the cancellation token fires, the stream ends or
//! fails, or the scheduler drops its receiver. The last three cancel the
//! token themselves.

use std::io;

use crossterm::event::{
    Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use scene_core::{Event, SpecialKey};

/// Convert a terminal notification into a scene event
///
/// Returns `None` for notifications scenes don't react to (key releases,
/// focus changes, pastes, unmapped keys).
pub fn map_event(event: &TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
        TermEvent::Mouse(mouse) => Some(Event::Mouse {
            x: i32::from(mouse.column),
            y: i32::from(mouse.row),
        }),
        TermEvent::Resize(width, height) => Some(Event::Resize {
            width: i32::from(*width),
            height: i32::from(*height),
        }),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Event> {
    let event = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Event::Special(SpecialKey::Quit)
        }
        KeyCode::Char(c) => Event::Key(c),
        KeyCode::Up => Event::Special(SpecialKey::Up),
        KeyCode::Down => Event::Special(SpecialKey::Down),
        KeyCode::Left => Event::Special(SpecialKey::Left),
        KeyCode::Right => Event::Special(SpecialKey::Right),
        KeyCode::Backspace => Event::Special(SpecialKey::Backspace),
        KeyCode::Enter => Event::Special(SpecialKey::Enter),
        KeyCode::Esc => Event::Special(SpecialKey::Reset),
        _ => return None,
    };
    Some(event)
}

/// Forward mapped events from `stream` to `tx` until cancelled
///
/// However the pump stops, it cancels `cancel` on the way out so the
/// scheduler does not keep running without input.
pub async fn pump<S>(mut stream: S, tx: mpsc::UnboundedSender<Event>, cancel: CancellationToken)
where
    S: Stream<Item = io::Result<TermEvent>> + Unpin,
{
    loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => break,

            next = stream.next() => match next {
                Some(Ok(raw)) => {
                    let Some(event) = map_event(&raw) else {
                        continue;
                    };
                    if tx.send(event).is_err() {
                        debug!("event receiver dropped");
                        break;
                    }
                }
                Some(Err(e)) => {
                    warn!(error = %e, "terminal event stream error");
                    break;
                }
                None => break,
            },
        }
    }
    cancel.cancel();
    debug!("input pipeline stopped");
}

/// Spawn the input task over a stream of terminal notifications
///
/// The binary passes crossterm's `EventStream`.
pub fn spawn_pump<S>(
    stream: S,
    tx: mpsc::UnboundedSender<Event>,
    cancel: CancellationToken,
) -> JoinHandle<()>
where
    S: Stream<Item = io::Result<TermEvent>> + Unpin + Send + 'static,
{
    tokio::spawn(pump(stream, tx, cancel))
}
