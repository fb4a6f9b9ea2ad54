//! Scene Core - Headless Terminal Lesson Engine for codetalk
//!
//! This crate holds everything a codetalk lesson needs except the terminal
//! itself: text layout, screen-region snapshots, hover translation, the
//! animation element state machines and the tick scheduler that drives
//! them. It draws through the [`Surface`] trait, so the same scene runs on
//! a real terminal or on an in-memory grid in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Terminal Surface (tui)                    │
//! │     crossterm input task ──Event──►  ◄──draw── ratatui buffer │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │
//! ┌──────────────────────────────┼───────────────────────────────┐
//! │                        SCENE CORE                             │
//! │  ┌───────────────────────────┴─────────────────────────────┐ │
//! │  │                        Scheduler                         │ │
//! │  │   drains events ─► root Element ─► Surface::flush        │ │
//! │  └───────────────────────────┬─────────────────────────────┘ │
//! │   ┌──────────┐  ┌────────────┴──┐  ┌───────────┐  ┌────────┐ │
//! │   │  Layout  │  │   Elements    │  │ Translate │  │ Region │ │
//! │   └──────────┘  └───────────────┘  └───────────┘  └────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Element`]: the `update` / `done` / `reset` contract every piece of a
//!   scene implements
//! - [`Scheduler`]: batches input per tick and drives the root element
//! - [`Surface`]: the cell grid elements draw on; [`MemorySurface`] is the
//!   headless implementation
//! - [`VirtualRegion`]: a snapshot of part of the surface
//! - [`ReplaceMap`]: the dictionary behind hover translations
//!
//! # Quick Start
//!
//! ```ignore
//! use scene_core::element::{SequentialPlayer, SlowText, WaitForNext};
//! use scene_core::{MemorySurface, Scheduler, Stage};
//!
//! let stage = Stage::default();
//! let root = SequentialPlayer::new(vec![
//!     Box::new(SlowText::new("Hello!", stage.margin_rect(0, 0, 1))),
//!     Box::new(WaitForNext::new()),
//! ]);
//! let mut scheduler = Scheduler::new(Box::new(root), MemorySurface::new(79, 20), stage);
//! scheduler.start()?;
//! scheduler.tick(Vec::new())?;
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod element;
pub mod error;
pub mod events;
pub mod geometry;
pub mod layout;
pub mod region;
pub mod scheduler;
pub mod sound;
pub mod style;
pub mod surface;
pub mod translate;

pub use config::{ConfigError, ConfigOverrides, ConfigSource, SceneConfig};
pub use element::{Checkable, Element};
pub use error::SceneError;
pub use events::{Event, SpecialKey};
pub use geometry::{Rect, Stage};
pub use layout::TAB_WIDTH;
pub use region::VirtualRegion;
pub use scheduler::{Scheduler, TickOutcome};
pub use sound::{Silence, SoundEffect, TypingSounds};
pub use style::{Color, Style};
pub use surface::{DrawCall, MemorySurface, Pixel, Surface, SurfaceExt};
pub use translate::{Dictionary, PopupSpec, ReplaceMap, Translation};
