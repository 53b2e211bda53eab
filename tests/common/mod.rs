//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use space_garbage::core::{Context, Flow, Routine, Surface};
use space_garbage::term::FrameBuffer;
use space_garbage::types::Intensity;

/// Routine handle that stays inspectable after the scheduler takes it.
pub struct Watched<R>(pub Rc<RefCell<R>>);

impl<R: Routine> Watched<R> {
    pub fn new(routine: R) -> (Self, Rc<RefCell<R>>) {
        let shared = Rc::new(RefCell::new(routine));
        (Self(Rc::clone(&shared)), shared)
    }
}

impl<R: Routine> Routine for Watched<R> {
    fn resume(&mut self, ctx: &mut Context<'_>) -> Flow {
        self.0.borrow_mut().resume(ctx)
    }

    fn name(&self) -> &'static str {
        self.0.borrow().name()
    }
}

/// Framebuffer that also counts writes per intensity and refreshes.
pub struct RecordingSurface {
    pub fb: FrameBuffer,
    pub bold_writes: usize,
    pub dim_writes: usize,
    pub refreshes: usize,
}

impl RecordingSurface {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            fb: FrameBuffer::new(cols, rows),
            bold_writes: 0,
            dim_writes: 0,
            refreshes: 0,
        }
    }
}

impl Surface for RecordingSurface {
    fn bounds(&self) -> (u16, u16) {
        self.fb.bounds()
    }

    fn write_glyph(&mut self, row: u16, col: u16, glyph: char, intensity: Intensity) {
        match intensity {
            Intensity::Bold => self.bold_writes += 1,
            Intensity::Dim => self.dim_writes += 1,
            Intensity::Normal => {}
        }
        self.fb.write_glyph(row, col, glyph, intensity);
    }

    fn refresh(&mut self) -> anyhow::Result<()> {
        self.refreshes += 1;
        Ok(())
    }
}
