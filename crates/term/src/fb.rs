//! In-memory character grid.

use space_garbage_core::Surface;

use crate::types::Intensity;

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub intensity: Intensity,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            intensity: Intensity::Normal,
        }
    }
}

/// 2D framebuffer of character cells.
///
/// Also a [`Surface`] on its own, which makes it the grid used by tests and
/// benchmarks; `refresh` has nothing to flush.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Characters of row `y`, trailing blanks included.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .map(|x| self.get(x, y).map(|c| c.ch).unwrap_or(' '))
            .collect()
    }

    /// Number of cells currently showing `ch`.
    pub fn count(&self, ch: char) -> usize {
        self.cells.iter().filter(|c| c.ch == ch).count()
    }
}

impl Surface for FrameBuffer {
    fn bounds(&self) -> (u16, u16) {
        (self.height, self.width)
    }

    fn write_glyph(&mut self, row: u16, col: u16, glyph: char, intensity: Intensity) {
        self.set(col, row, Cell { ch: glyph, intensity });
    }

    fn refresh(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}
