//! Blast animation played where a piece of garbage was shot down.

use crate::frame::Frame;
use crate::scheduler::{Context, Flow, Routine};

const EXPLOSION_FRAMES: [&str; 4] = [
    "\
 (
(_)",
    "\
  ( (
 ( _ )
  ( )",
    "\
   (  (
 (  (_)  (
  ( ) (_)
    ( )",
    "\
     (  (  (
  (  (_)  (_) (
 (_)  ( ) (  )
   (  (_)  ( )
      ( )",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Draw(usize),
    Erase(usize),
}

/// Fixed sequence of growing blast frames, each shown for one tick and
/// cleared for one tick.
#[derive(Debug, Clone)]
pub struct Explosion {
    center_row: f64,
    center_col: f64,
    frames: Vec<Frame>,
    stage: Stage,
}

impl Explosion {
    pub fn new(center_row: f64, center_col: f64) -> Self {
        Self {
            center_row,
            center_col,
            frames: EXPLOSION_FRAMES.iter().map(|f| Frame::new(f)).collect(),
            stage: Stage::Draw(0),
        }
    }

    /// Ticks from the first resume to completion.
    pub fn duration(&self) -> u32 {
        2 * self.frames.len() as u32
    }

    pub fn is_finished(&self) -> bool {
        self.stage == Stage::Draw(self.frames.len())
    }

    fn corner(&self, frame: &Frame) -> (f64, f64) {
        let (rows, cols) = frame.extent();
        (
            self.center_row - rows as f64 / 2.0,
            self.center_col - cols as f64 / 2.0,
        )
    }
}

impl Routine for Explosion {
    fn resume(&mut self, ctx: &mut Context<'_>) -> Flow {
        match self.stage {
            Stage::Draw(i) if i >= self.frames.len() => Flow::Done,
            Stage::Draw(i) => {
                if i == 0 {
                    ctx.surface.beep();
                }
                let frame = &self.frames[i];
                let (row, col) = self.corner(frame);
                frame.draw(ctx.surface, row, col);
                self.stage = Stage::Erase(i);
                Flow::Suspend(1)
            }
            Stage::Erase(i) => {
                let frame = &self.frames[i];
                let (row, col) = self.corner(frame);
                frame.erase(ctx.surface, row, col);
                self.stage = Stage::Draw(i + 1);
                Flow::Suspend(1)
            }
        }
    }

    fn name(&self) -> &'static str {
        "explosion"
    }
}
