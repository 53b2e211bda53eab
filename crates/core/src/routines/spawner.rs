//! Fills the orbit with garbage at the pace the difficulty table sets.

use std::rc::Rc;

use crate::frame::Frame;
use crate::routines::garbage::Garbage;
use crate::scheduler::{Context, Flow, Routine};

#[derive(Debug, Clone)]
pub struct GarbageSpawner {
    frames: Vec<Rc<Frame>>,
    spawned: u64,
}

impl GarbageSpawner {
    pub fn new(frames: Vec<Rc<Frame>>) -> Self {
        Self { frames, spawned: 0 }
    }

    /// Pieces of garbage launched so far.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }
}

impl Routine for GarbageSpawner {
    fn resume(&mut self, ctx: &mut Context<'_>) -> Flow {
        let year = ctx.world.year();
        let Some(delay) = ctx.world.scenario.garbage_delay(year) else {
            return Flow::Suspend(1);
        };
        let Some(frame) = ctx.world.rng.choose(&self.frames).cloned() else {
            return Flow::Suspend(1);
        };

        let (_, cols) = ctx.surface.bounds();
        let width = frame.columns() as i64;
        let max_col = i64::from(cols) - 1;
        let col = ctx.world.rng.range_inclusive(width, max_col - width);
        let speed = ctx.world.config.garbage_speed;
        ctx.spawn(Garbage::new(frame, col as f64, speed));
        self.spawned += 1;

        Flow::Suspend(delay)
    }

    fn name(&self) -> &'static str {
        "garbage-spawner"
    }
}
