//! Frame - immutable multi-line text sprite.
//!
//! A frame is drawn onto a [`Surface`] at a (possibly fractional, possibly
//! negative) origin. Anything that falls outside the surface is clipped,
//! whitespace glyphs are transparent, and the bottom-right cell of the surface
//! is never written because terminals cannot address it without scrolling.

use crate::surface::Surface;
use crate::types::Intensity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<Vec<char>>,
    columns: usize,
}

impl Frame {
    /// Build a frame from text. Lines are split the same way `str::lines` does.
    pub fn new(text: &str) -> Self {
        let lines: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();
        let columns = lines.iter().map(Vec::len).max().unwrap_or(0);
        Self { lines, columns }
    }

    /// (rows, columns) occupied by the frame.
    pub fn extent(&self) -> (usize, usize) {
        (self.lines.len(), self.columns)
    }

    pub fn rows(&self) -> usize {
        self.lines.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// True when the frame has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() || self.columns == 0
    }

    /// Write the frame onto `surface` with its top-left corner at `(row, col)`.
    ///
    /// With `erase` set every glyph that would be drawn is replaced by a blank,
    /// which removes a previous draw at the same origin.
    pub fn render(&self, surface: &mut dyn Surface, row: f64, col: f64, erase: bool) {
        self.render_with(surface, row, col, erase, Intensity::Normal);
    }

    pub fn draw(&self, surface: &mut dyn Surface, row: f64, col: f64) {
        self.render(surface, row, col, false);
    }

    pub fn erase(&self, surface: &mut dyn Surface, row: f64, col: f64) {
        self.render(surface, row, col, true);
    }

    pub fn render_with(
        &self,
        surface: &mut dyn Surface,
        row: f64,
        col: f64,
        erase: bool,
        intensity: Intensity,
    ) {
        let (max_rows, max_cols) = surface.bounds();
        let (max_rows, max_cols) = (i64::from(max_rows), i64::from(max_cols));
        let top = row.round() as i64;
        let left = col.round() as i64;

        for (dy, line) in self.lines.iter().enumerate() {
            let y = top + dy as i64;
            if y < 0 {
                continue;
            }
            if y >= max_rows {
                break;
            }
            for (dx, &glyph) in line.iter().enumerate() {
                let x = left + dx as i64;
                if x < 0 {
                    continue;
                }
                if x >= max_cols {
                    break;
                }
                if glyph.is_whitespace() {
                    continue;
                }
                if y == max_rows - 1 && x == max_cols - 1 {
                    continue;
                }
                let glyph = if erase { ' ' } else { glyph };
                surface.write_glyph(y as u16, x as u16, glyph, intensity);
            }
        }
    }
}

/// Write a single glyph at a fractional position, clipped like [`Frame::render`].
///
/// Unlike frame rendering, a blank glyph is written, which is how single-cell
/// sprites erase themselves.
pub fn put_glyph(surface: &mut dyn Surface, row: f64, col: f64, glyph: char, intensity: Intensity) {
    let (max_rows, max_cols) = surface.bounds();
    let (y, x) = (row.round(), col.round());
    if y < 0.0 || x < 0.0 || y >= f64::from(max_rows) || x >= f64::from(max_cols) {
        return;
    }
    let (y, x) = (y as u16, x as u16);
    if y + 1 == max_rows && x + 1 == max_cols {
        return;
    }
    surface.write_glyph(y, x, glyph, intensity);
}

impl From<&str> for Frame {
    fn from(text: &str) -> Self {
        Frame::new(text)
    }
}
