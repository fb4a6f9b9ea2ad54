//! Terminal Surface
//!
//! Implements the scene engine's [`Surface`] over a ratatui terminal. Cells
//! are written into a retained stage-sized buffer; `flush` copies that
//! buffer into the terminal's frame and lets ratatui diff it against what
//! is on screen.

use std::io;

use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect as TuiRect};
use ratatui::Terminal;

use scene_core::{Pixel, Stage, Surface};

use crate::theme;

/// A [`Surface`] that renders to a ratatui [`Terminal`]
pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    buffer: Buffer,
    cursor: Option<(i32, i32)>,
}

impl<B: Backend> TerminalSurface<B> {
    /// Wrap a terminal; the drawable canvas is the stage size
    pub fn new(terminal: Terminal<B>, stage: Stage) -> Self {
        let area = TuiRect::new(0, 0, to_u16(stage.width), to_u16(stage.height));
        Self {
            terminal,
            buffer: Buffer::empty(area),
            cursor: None,
        }
    }

    /// The wrapped terminal
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Mutable access to the wrapped terminal
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Unwrap the terminal
    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }

    fn position(&self, x: i32, y: i32) -> Option<Position> {
        let (width, height) = (self.buffer.area.width as i32, self.buffer.area.height as i32);
        if x < 0 || y < 0 || x >= width || y >= height {
            return None;
        }
        Some(Position::new(x as u16, y as u16))
    }
}

fn to_u16(v: i32) -> u16 {
    v.clamp(0, u16::MAX as i32) as u16
}

impl<B: Backend> Surface for TerminalSurface<B> {
    fn size(&self) -> (i32, i32) {
        (self.buffer.area.width as i32, self.buffer.area.height as i32)
    }

    fn pixel(&self, x: i32, y: i32) -> Pixel {
        let Some(cell) = self.position(x, y).and_then(|p| self.buffer.cell(p)) else {
            return Pixel::default();
        };

        let mut chars = cell.symbol().chars();
        let main = chars.next().unwrap_or(' ');
        Pixel {
            main,
            combining: chars.collect(),
            style: theme::from_tui(cell.fg),
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32, pixel: Pixel) {
        let Some(pos) = self.position(x, y) else {
            return;
        };
        if let Some(cell) = self.buffer.cell_mut(pos) {
            let mut symbol = String::with_capacity(1 + pixel.combining.len());
            symbol.push(pixel.main);
            symbol.extend(pixel.combining.iter());

            cell.reset();
            cell.set_symbol(&symbol);
            cell.set_style(theme::to_tui(pixel.style));
        }
    }

    fn show_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Some((x, y));
    }

    fn hide_cursor(&mut self) {
        self.cursor = None;
    }

    fn clear(&mut self) {
        self.buffer.reset();
    }

    fn flush(&mut self) -> io::Result<()> {
        let buffer = &self.buffer;
        let cursor = self.cursor;

        self.terminal.draw(|frame| {
            let area = frame.area();
            let out = frame.buffer_mut();

            for y in 0..area.height.min(buffer.area.height) {
                for x in 0..area.width.min(buffer.area.width) {
                    out[(x, y)] = buffer[(x, y)].clone();
                }
            }

            if let Some((x, y)) = cursor {
                if x >= 0 && y >= 0 && (x as u16) < area.width && (y as u16) < area.height {
                    frame.set_cursor_position(Position::new(x as u16, y as u16));
                }
            }
        })?;

        Ok(())
    }
}
