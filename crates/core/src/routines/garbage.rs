//! Falling space garbage.
//!
//! A piece of garbage owns one obstacle for its whole flight. The obstacle is
//! held through an [`ObstacleGuard`], so it disappears from the registry on
//! every way out: falling off the bottom, finishing its explosion after being
//! shot, or the routine being dropped. An exploding piece is still an
//! obstacle.

use std::rc::Rc;

use crate::frame::Frame;
use crate::obstacles::ObstacleGuard;
use crate::routines::explosion::Explosion;
use crate::scheduler::{Context, Flow, Routine};
use crate::types::PANEL_ROWS;

#[derive(Debug)]
enum GarbageState {
    Spawning,
    Drawn,
    Exploding(Explosion),
}

#[derive(Debug)]
pub struct Garbage {
    frame: Rc<Frame>,
    row: f64,
    col: f64,
    speed: f64,
    obstacle: Option<ObstacleGuard>,
    state: GarbageState,
}

impl Garbage {
    pub fn new(frame: Rc<Frame>, col: f64, speed: f64) -> Self {
        Self {
            frame,
            row: 0.0,
            col,
            speed,
            obstacle: None,
            state: GarbageState::Spawning,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.col)
    }

    pub fn is_exploding(&self) -> bool {
        matches!(self.state, GarbageState::Exploding(_))
    }

    /// Lowest row garbage may be drawn at on a grid of `rows` rows.
    fn floor(rows: u16) -> f64 {
        f64::from(rows) - f64::from(PANEL_ROWS) - 1.0
    }

    fn fall_or_finish(&mut self, ctx: &mut Context<'_>) -> Flow {
        let (rows, _) = ctx.surface.bounds();
        if self.row >= Self::floor(rows) {
            self.obstacle = None;
            return Flow::Done;
        }
        self.frame.draw(ctx.surface, self.row, self.col);
        self.state = GarbageState::Drawn;
        Flow::Suspend(1)
    }

    fn explode(&mut self, ctx: &mut Context<'_>) -> Flow {
        let (rows, cols) = self.frame.extent();
        let center_row = self.row + rows as f64 / 2.0;
        let center_col = self.col + cols as f64 / 2.0;
        log::debug!("garbage shot down at ({}, {})", self.row, self.col);
        let mut explosion = Explosion::new(center_row, center_col);
        let flow = explosion.resume(ctx);
        self.state = GarbageState::Exploding(explosion);
        self.finish_on_done(flow)
    }

    fn finish_on_done(&mut self, flow: Flow) -> Flow {
        if flow == Flow::Done {
            self.obstacle = None;
        }
        flow
    }
}

impl Routine for Garbage {
    fn resume(&mut self, ctx: &mut Context<'_>) -> Flow {
        match &mut self.state {
            GarbageState::Spawning => {
                let (_, cols) = ctx.surface.bounds();
                let max_col = (f64::from(cols) - 1.0).max(0.0);
                self.col = self.col.clamp(0.0, max_col);
                let (rows, columns) = self.frame.extent();
                self.obstacle = Some(ctx.world.obstacles.insert(self.row, self.col, rows, columns));
                self.fall_or_finish(ctx)
            }
            GarbageState::Drawn => {
                self.frame.erase(ctx.surface, self.row, self.col);
                self.row += self.speed;
                let hit = match &self.obstacle {
                    Some(guard) => {
                        guard.move_to(self.row, self.col);
                        ctx.world.obstacles.drain_hit(guard.id())
                    }
                    None => false,
                };
                if hit {
                    return self.explode(ctx);
                }
                self.fall_or_finish(ctx)
            }
            GarbageState::Exploding(explosion) => {
                let flow = explosion.resume(ctx);
                self.finish_on_done(flow)
            }
        }
    }

    fn name(&self) -> &'static str {
        "garbage"
    }
}
