//! Plasma shot fired by the spaceship.

use crate::frame::put_glyph;
use crate::scheduler::{Context, Flow, Routine};
use crate::types::Intensity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShotState {
    Muzzle,
    Flash,
    Launch,
    Flying,
}

#[derive(Debug, Clone)]
pub struct Shot {
    row: f64,
    col: f64,
    row_speed: f64,
    col_speed: f64,
    state: ShotState,
}

impl Shot {
    /// Shot flying straight up.
    pub fn new(row: f64, col: f64) -> Self {
        Self::with_speed(row, col, -1.0, 0.0)
    }

    pub fn with_speed(row: f64, col: f64, row_speed: f64, col_speed: f64) -> Self {
        Self {
            row,
            col,
            row_speed,
            col_speed,
            state: ShotState::Muzzle,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.col)
    }

    pub fn symbol(&self) -> char {
        if self.col_speed != 0.0 {
            '-'
        } else {
            '|'
        }
    }

    fn put(&self, ctx: &mut Context<'_>, glyph: char) {
        put_glyph(ctx.surface, self.row, self.col, glyph, Intensity::Normal);
    }

    /// Shots travel strictly inside the grid border.
    fn in_flight_area(&self, rows: u16, cols: u16) -> bool {
        let (max_row, max_col) = (f64::from(rows) - 1.0, f64::from(cols) - 1.0);
        0.0 < self.row && self.row < max_row && 0.0 < self.col && self.col < max_col
    }

    fn advance(&mut self, ctx: &mut Context<'_>) -> Flow {
        self.row += self.row_speed;
        self.col += self.col_speed;

        if let Some(id) = ctx.world.obstacles.contains_point(self.row, self.col) {
            log::debug!("shot hit {:?} at ({}, {})", id, self.row, self.col);
            ctx.world.obstacles.record_hit(id);
            return Flow::Done;
        }

        let (rows, cols) = ctx.surface.bounds();
        if !self.in_flight_area(rows, cols) {
            return Flow::Done;
        }

        self.put(ctx, self.symbol());
        Flow::Suspend(1)
    }
}

impl Routine for Shot {
    fn resume(&mut self, ctx: &mut Context<'_>) -> Flow {
        match self.state {
            ShotState::Muzzle => {
                self.put(ctx, '*');
                self.state = ShotState::Flash;
                Flow::Suspend(1)
            }
            ShotState::Flash => {
                self.put(ctx, 'O');
                self.state = ShotState::Launch;
                Flow::Suspend(1)
            }
            ShotState::Launch => {
                self.put(ctx, ' ');
                ctx.surface.beep();
                self.state = ShotState::Flying;
                self.advance(ctx)
            }
            ShotState::Flying => {
                self.put(ctx, ' ');
                self.advance(ctx)
            }
        }
    }

    fn name(&self) -> &'static str {
        "shot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routines::testing::Bench;
    use crate::surface::NoInput;

    #[test]
    fn shot_flashes_then_flies_up() {
        let mut bench = Bench::new(10, 10);
        let mut shot = Shot::new(6.0, 4.0);

        assert_eq!(bench.resume(&mut shot, &mut NoInput), Flow::Suspend(1));
        assert_eq!(bench.surface.glyph(6, 4), '*');
        assert_eq!(bench.resume(&mut shot, &mut NoInput), Flow::Suspend(1));
        assert_eq!(bench.surface.glyph(6, 4), 'O');
        assert_eq!(bench.resume(&mut shot, &mut NoInput), Flow::Suspend(1));
        assert_eq!(bench.surface.glyph(6, 4), ' ');
        assert_eq!(bench.surface.glyph(5, 4), '|');
        assert_eq!(bench.surface.beeps, 1);

        assert_eq!(bench.resume(&mut shot, &mut NoInput), Flow::Suspend(1));
        assert_eq!(bench.surface.glyph(5, 4), ' ');
        assert_eq!(bench.surface.glyph(4, 4), '|');
    }

    #[test]
    fn shot_leaves_silently_at_the_border() {
        let mut bench = Bench::new(10, 10);
        let mut shot = Shot::new(3.0, 4.0);
        let mut flows = Vec::new();
        for _ in 0..6 {
            flows.push(bench.resume(&mut shot, &mut NoInput));
        }
        // Muzzle, flash, row 2, row 1, then row 0 is the border.
        assert_eq!(flows[4], Flow::Done);
        assert_eq!(bench.surface.count('|'), 0);
        assert_eq!(bench.world.obstacles.pending_hits(), 0);
    }

    #[test]
    fn sideways_shot_uses_dash() {
        let mut bench = Bench::new(10, 10);
        let mut shot = Shot::with_speed(4.0, 2.0, 0.0, 1.0);
        assert_eq!(shot.symbol(), '-');
        for _ in 0..3 {
            bench.resume(&mut shot, &mut NoInput);
        }
        assert_eq!(bench.surface.glyph(4, 3), '-');
    }

    #[test]
    fn shot_records_one_hit_and_stops() {
        let mut bench = Bench::new(20, 20);
        let guard = bench.world.obstacles.insert(4.0, 3.0, 2, 3);
        let mut shot = Shot::new(6.0, 4.0);

        bench.resume(&mut shot, &mut NoInput);
        bench.resume(&mut shot, &mut NoInput);
        assert_eq!(bench.resume(&mut shot, &mut NoInput), Flow::Done);

        assert_eq!(bench.world.obstacles.pending_hits(), 1);
        assert!(bench.world.obstacles.drain_hit(guard.id()));
        assert_eq!(bench.surface.count('|'), 0);
    }
}
