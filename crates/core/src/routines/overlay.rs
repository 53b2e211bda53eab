//! Debug overlay showing obstacle bounding boxes.

use crate::frame::Frame;
use crate::scheduler::{Context, Flow, Routine};

#[derive(Debug, Clone, Default)]
pub struct ObstacleOverlay {
    drawn: Vec<(f64, f64, Frame)>,
}

impl ObstacleOverlay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Routine for ObstacleOverlay {
    fn resume(&mut self, ctx: &mut Context<'_>) -> Flow {
        for (row, col, frame) in self.drawn.drain(..) {
            frame.erase(ctx.surface, row, col);
        }
        for obstacle in ctx.world.obstacles.snapshot() {
            let frame = Frame::new(&obstacle.outline());
            frame.draw(ctx.surface, obstacle.row, obstacle.column);
            self.drawn.push((obstacle.row, obstacle.column, frame));
        }
        Flow::Suspend(1)
    }

    fn name(&self) -> &'static str {
        "obstacle-overlay"
    }
}
