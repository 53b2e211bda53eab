//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (routines, terminal rendering, input mapping).
//!
//! # Timing Constants
//!
//! Every duration in the game is measured in whole ticks:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 20 | Fixed scheduler quantum (50 ticks per second) |
//! | `LEVEL_TICKS` | 50 | Ticks between two year advances |
//! | `SHIP_REDRAW_TICKS` | 2 | Ticks the spaceship sprite stays on screen |
//! | `STAR_DIM_TICKS` | 20 | Dim phase of a star |
//! | `STAR_RISE_TICKS` | 3 | Normal phase before bold |
//! | `STAR_BOLD_TICKS` | 3 | Bold phase |
//! | `STAR_FALL_TICKS` | 5 | Normal phase after bold |
//!
//! # Year Progression
//!
//! The game starts in `START_YEAR` (1957, the first Sputnik) and advances one
//! year every `LEVEL_TICKS`. The plasma gun unlocks at `FIRE_UNLOCK_YEAR`.
//!
//! # Examples
//!
//! ```
//! use space_garbage_types::{Controls, Intensity};
//!
//! let controls = Controls::new(-1, 0, true);
//! assert_eq!(controls.row_delta, -1);
//! assert!(controls.fire);
//! assert_eq!(Intensity::default(), Intensity::Normal);
//! ```

/// Fixed scheduler quantum in milliseconds.
pub const TICK_MS: u64 = 20;

/// Number of stars in the sky.
pub const STAR_COUNT: usize = 100;

/// Glyphs a star is drawn with (one picked per star).
pub const STAR_GLYPHS: [char; 4] = ['+', '*', '.', ':'];

/// Upper bound (inclusive) of the random phase offset of a star.
pub const STAR_MAX_OFFSET_TICKS: u32 = 10;

pub const STAR_DIM_TICKS: u32 = 20;
pub const STAR_RISE_TICKS: u32 = 3;
pub const STAR_BOLD_TICKS: u32 = 3;
pub const STAR_FALL_TICKS: u32 = 5;

/// Ticks between two increments of the year counter.
pub const LEVEL_TICKS: u32 = 50;

/// First year shown on the info panel.
pub const START_YEAR: u32 = 1957;

/// Year from which the spaceship can fire.
pub const FIRE_UNLOCK_YEAR: u32 = 2020;

/// Ticks the spaceship sprite is held before the next move.
pub const SHIP_REDRAW_TICKS: u32 = 2;

/// Rows per tick a piece of garbage falls.
pub const GARBAGE_SPEED: f64 = 0.5;

/// Rows reserved at the bottom of the grid for the info panel.
pub const PANEL_ROWS: u16 = 3;

/// Velocity fading applied on every physics step.
pub const SPEED_FADING: f64 = 0.8;

/// Absolute speed limit of the spaceship on each axis.
pub const SPEED_LIMIT: f64 = 2.0;

/// Glyph intensity, the only text attribute the game uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Intensity {
    Dim,
    #[default]
    Normal,
    Bold,
}

/// Coalesced keyboard state for one poll.
///
/// - `row_delta`: -1 (up), 0, 1 (down)
/// - `col_delta`: -1 (left), 0, 1 (right)
/// - `fire`: whether fire was pressed at all since the previous poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub row_delta: i8,
    pub col_delta: i8,
    pub fire: bool,
}

impl Controls {
    /// Build controls, normalising deltas to {-1, 0, 1}.
    pub fn new(row_delta: i8, col_delta: i8, fire: bool) -> Self {
        Self {
            row_delta: row_delta.signum(),
            col_delta: col_delta.signum(),
            fire,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.row_delta == 0 && self.col_delta == 0 && !self.fire
    }
}
