//! Terminal-backed [`Surface`].

use std::io::Write;

use anyhow::Result;
use space_garbage_core::Surface;

use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::types::Intensity;

/// A [`FrameBuffer`] flushed through a [`TerminalRenderer`] on every refresh.
pub struct TerminalSurface<W: Write = std::io::Stdout> {
    fb: FrameBuffer,
    renderer: TerminalRenderer<W>,
    bell: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(renderer: TerminalRenderer<W>, rows: u16, cols: u16) -> Self {
        Self {
            fb: FrameBuffer::new(cols, rows),
            renderer,
            bell: false,
        }
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer<W> {
        &mut self.renderer
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn bounds(&self) -> (u16, u16) {
        self.fb.bounds()
    }

    fn write_glyph(&mut self, row: u16, col: u16, glyph: char, intensity: Intensity) {
        self.fb.write_glyph(row, col, glyph, intensity);
    }

    fn refresh(&mut self) -> Result<()> {
        let bell = std::mem::take(&mut self.bell);
        self.renderer.draw(&self.fb, bell)
    }

    fn beep(&mut self) {
        self.bell = true;
    }
}
