//! Player-controlled spaceship.
//!
//! The ship redraws itself every few ticks, cycling through its sprite frames.
//! Between two draws it reads the keyboard, applies inertia, stays inside the
//! sky area and, once the plasma gun is unlocked, fires. Touching an obstacle
//! switches it to [`ShipState::GameOver`] for good: from then on it only
//! keeps the game-over banner on screen.

use std::rc::Rc;

use crate::frame::Frame;
use crate::physics::update_speed;
use crate::routines::shot::Shot;
use crate::scheduler::{Context, Flow, Routine};
use crate::types::PANEL_ROWS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipState {
    Launching,
    Flying,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Spaceship {
    frames: Vec<Rc<Frame>>,
    game_over: Rc<Frame>,
    frame_index: usize,
    row: f64,
    col: f64,
    row_speed: f64,
    col_speed: f64,
    redraw_ticks: u32,
    state: ShipState,
}

impl Spaceship {
    /// `frames` must not be empty; an empty list leaves the ship invisible.
    pub fn new(frames: Vec<Rc<Frame>>, game_over: Rc<Frame>, row: f64, col: f64) -> Self {
        Self {
            frames,
            game_over,
            frame_index: 0,
            row,
            col,
            row_speed: 0.0,
            col_speed: 0.0,
            redraw_ticks: crate::types::SHIP_REDRAW_TICKS,
            state: ShipState::Launching,
        }
    }

    pub fn with_redraw_ticks(mut self, ticks: u32) -> Self {
        self.redraw_ticks = ticks.max(1);
        self
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.col)
    }

    pub fn velocity(&self) -> (f64, f64) {
        (self.row_speed, self.col_speed)
    }

    pub fn state(&self) -> ShipState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == ShipState::GameOver
    }

    fn frame(&self) -> Option<&Rc<Frame>> {
        self.frames.get(self.frame_index)
    }

    /// Keep the current sprite inside the sky area.
    fn clamp(&mut self, rows: u16, cols: u16) {
        let (frame_rows, frame_cols) = self.frame().map(|f| f.extent()).unwrap_or((1, 1));
        let max_row = f64::from(rows) - f64::from(PANEL_ROWS) - frame_rows as f64;
        let max_col = f64::from(cols) - 1.0 - frame_cols as f64;
        self.row = self.row.min(max_row).max(1.0);
        self.col = self.col.min(max_col).max(1.0);
    }

    fn draw(&self, ctx: &mut Context<'_>) {
        if let Some(frame) = self.frame() {
            frame.draw(ctx.surface, self.row, self.col);
        }
    }

    fn erase(&self, ctx: &mut Context<'_>) {
        if let Some(frame) = self.frame() {
            frame.erase(ctx.surface, self.row, self.col);
        }
    }

    fn draw_game_over(&self, ctx: &mut Context<'_>) {
        let (rows, cols) = ctx.surface.bounds();
        let (frame_rows, frame_cols) = self.game_over.extent();
        let row = ((f64::from(rows) - frame_rows as f64) / 2.0).max(0.0);
        let col = ((f64::from(cols) - frame_cols as f64) / 2.0).max(0.0);
        self.game_over.draw(ctx.surface, row.floor(), col.floor());
    }

    fn fly(&mut self, ctx: &mut Context<'_>) -> Flow {
        self.erase(ctx);

        let controls = ctx.input.poll();
        (self.row_speed, self.col_speed) = update_speed(
            self.row_speed,
            self.col_speed,
            controls.row_delta,
            controls.col_delta,
        );
        self.row += self.row_speed;
        self.col += self.col_speed;

        if !self.frames.is_empty() {
            self.frame_index = (self.frame_index + 1) % self.frames.len();
        }
        let (rows, cols) = ctx.surface.bounds();
        self.clamp(rows, cols);

        if controls.fire && ctx.world.fire_unlocked() {
            let width = self.frame().map(|f| f.columns()).unwrap_or(1);
            let col = self.col + (width / 2) as f64;
            ctx.spawn(Shot::new(self.row - 1.0, col));
        }

        if let Some(id) = ctx.world.obstacles.contains_point(self.row, self.col) {
            log::info!(
                "spaceship crashed into {:?} at ({}, {}) in {}",
                id,
                self.row,
                self.col,
                ctx.world.year()
            );
            self.state = ShipState::GameOver;
            self.draw_game_over(ctx);
            return Flow::Suspend(1);
        }

        self.draw(ctx);
        Flow::Suspend(self.redraw_ticks)
    }
}

impl Routine for Spaceship {
    fn resume(&mut self, ctx: &mut Context<'_>) -> Flow {
        match self.state {
            ShipState::Launching => {
                let (rows, cols) = ctx.surface.bounds();
                self.clamp(rows, cols);
                self.draw(ctx);
                self.state = ShipState::Flying;
                Flow::Suspend(self.redraw_ticks)
            }
            ShipState::Flying => self.fly(ctx),
            ShipState::GameOver => {
                self.draw_game_over(ctx);
                Flow::Suspend(1)
            }
        }
    }

    fn name(&self) -> &'static str {
        "spaceship"
    }
}
