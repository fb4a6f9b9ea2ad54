//! codetalk terminal front end
//!
//! Drives a `scene_core` lesson on a real terminal.
//!
//! # Architecture
//!
//! - **Surface**: a ratatui buffer behind the headless `Surface` trait
//! - **Input**: crossterm events mapped onto scene events, fed through a channel
//! - **Sound**: the terminal bell as the typing cue
//! - **Lesson**: the scene tree the binary plays

pub mod app;
pub mod input;
pub mod lesson;
pub mod sound;
pub mod surface;
pub mod theme;

pub use app::run;
pub use surface::TerminalSurface;
