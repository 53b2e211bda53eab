//! Device-facing capabilities consumed by the routines.
//!
//! The core never performs terminal I/O itself. A [`Surface`] is a character
//! grid that can be written to and flushed once per tick, an [`InputPoll`] is
//! a non-blocking source of coalesced key state.

use anyhow::Result;

use crate::types::{Controls, Intensity};

pub trait Surface {
    /// Grid size as (rows, columns).
    fn bounds(&self) -> (u16, u16);

    /// Write one glyph. Out-of-range coordinates are ignored.
    fn write_glyph(&mut self, row: u16, col: u16, glyph: char, intensity: Intensity);

    /// Make everything written since the previous refresh visible.
    fn refresh(&mut self) -> Result<()>;

    /// Audible cue. Silent unless the surface supports it.
    fn beep(&mut self) {}
}

pub trait InputPoll {
    /// Drain pending input without blocking.
    fn poll(&mut self) -> Controls;

    /// Whether the player asked to leave the game.
    fn quit_requested(&mut self) -> bool {
        false
    }
}

/// Input source that never reports any key.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputPoll for NoInput {
    fn poll(&mut self) -> Controls {
        Controls::default()
    }
}

/// Replays a fixed list of polls, then reports idle controls forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    polls: std::collections::VecDeque<Controls>,
    served: usize,
}

impl ScriptedInput {
    pub fn new(polls: impl IntoIterator<Item = Controls>) -> Self {
        Self {
            polls: polls.into_iter().collect(),
            served: 0,
        }
    }

    /// Number of times `poll` was called.
    pub fn served(&self) -> usize {
        self.served
    }
}

impl InputPoll for ScriptedInput {
    fn poll(&mut self) -> Controls {
        self.served += 1;
        self.polls.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Minimal in-memory surface for unit tests.
    pub struct GridSurface {
        rows: u16,
        cols: u16,
        cells: Vec<(char, Intensity)>,
        pub refreshes: usize,
        pub beeps: usize,
    }

    impl GridSurface {
        pub fn new(rows: u16, cols: u16) -> Self {
            Self {
                rows,
                cols,
                cells: vec![(' ', Intensity::Normal); rows as usize * cols as usize],
                refreshes: 0,
                beeps: 0,
            }
        }

        pub fn fill(&mut self, glyph: char) {
            for cell in &mut self.cells {
                cell.0 = glyph;
            }
        }

        pub fn glyph(&self, row: u16, col: u16) -> char {
            self.cells[row as usize * self.cols as usize + col as usize].0
        }

        pub fn intensity(&self, row: u16, col: u16) -> Intensity {
            self.cells[row as usize * self.cols as usize + col as usize].1
        }

        pub fn row_text(&self, row: u16) -> String {
            (0..self.cols).map(|c| self.glyph(row, c)).collect()
        }

        pub fn count(&self, glyph: char) -> usize {
            self.cells.iter().filter(|c| c.0 == glyph).count()
        }
    }

    impl Surface for GridSurface {
        fn bounds(&self) -> (u16, u16) {
            (self.rows, self.cols)
        }

        fn write_glyph(&mut self, row: u16, col: u16, glyph: char, intensity: Intensity) {
            if row < self.rows && col < self.cols {
                self.cells[row as usize * self.cols as usize + col as usize] = (glyph, intensity);
            }
        }

        fn refresh(&mut self) -> Result<()> {
            self.refreshes += 1;
            Ok(())
        }

        fn beep(&mut self) {
            self.beeps += 1;
        }
    }
}
