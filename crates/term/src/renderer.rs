//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! After the first full redraw only changed runs of cells are written.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::fb::FrameBuffer;
use crate::types::Intensity;

const BEL: &str = "\x07";

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a framebuffer, optionally ringing the terminal bell.
    ///
    /// The framebuffer is copied into internal state so the next call can
    /// diff against it.
    pub fn draw(&mut self, fb: &FrameBuffer, bell: bool) -> Result<()> {
        self.buf.clear();
        match &mut self.last {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(prev, fb, &mut self.buf)?;
                prev.clone_from(fb);
            }
            last => {
                encode_full_into(fb, &mut self.buf)?;
                *last = Some(fb.clone());
            }
        }
        if bell {
            self.buf.queue(Print(BEL))?;
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// The bottom-right cell is never written, so the terminal does not scroll.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current: Option<Intensity> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        let width = if y + 1 == fb.height() {
            fb.width().saturating_sub(1)
        } else {
            fb.width()
        };
        for x in 0..width {
            let cell = fb.get(x, y).unwrap_or_default();
            if current != Some(cell.intensity) {
                apply_intensity_into(out, cell.intensity)?;
                current = Some(cell.intensity);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<Intensity> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current != Some(cell.intensity) {
                apply_intensity_into(out, cell.intensity)?;
                current = Some(cell.intensity);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    if current.is_some() {
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn apply_intensity_into(out: &mut Vec<u8>, intensity: Intensity) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    match intensity {
        Intensity::Dim => {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        Intensity::Bold => {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        Intensity::Normal => {}
    }
    Ok(())
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let w = next.width();
    let h = next.height();

    for y in 0..h {
        // Keep the cursor off the bottom-right corner.
        let row_end = if y + 1 == h { w.saturating_sub(1) } else { w };
        let mut x = 0;
        while x < row_end {
            let a = prev.get(x, y).unwrap_or_default();
            let b = next.get(x, y).unwrap_or_default();
            if a == b {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < row_end {
                let a2 = prev.get(x, y).unwrap_or_default();
                let b2 = next.get(x, y).unwrap_or_default();
                if a2 == b2 {
                    break;
                }
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    fn bold(ch: char) -> Cell {
        Cell {
            ch,
            intensity: Intensity::Bold,
        }
    }

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let a = FrameBuffer::new(5, 2);
        let mut b = FrameBuffer::new(5, 2);

        // Change cells [1..=3] into X.
        for x in 1..=3 {
            b.set(x, 0, bold('X'));
        }

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3)]);
    }

    #[test]
    fn bottom_right_cell_is_never_emitted() {
        let a = FrameBuffer::new(3, 2);
        let mut b = FrameBuffer::new(3, 2);
        b.set(2, 1, bold('X'));

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert!(runs.is_empty());
    }

    #[test]
    fn second_draw_only_writes_changes_and_rings_bell() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(4, 3);
        fb.set(0, 0, bold('A'));
        renderer.draw(&fb, false).unwrap();
        let full_len = renderer.writer().len();
        assert!(!renderer.writer().contains(&0x07));

        fb.set(1, 1, bold('B'));
        renderer.draw(&fb, true).unwrap();
        let diff = &renderer.writer()[full_len..];
        assert!(diff.contains(&b'B'));
        assert!(!diff.contains(&b'A'));
        assert_eq!(diff.last(), Some(&0x07));
    }

    #[test]
    fn unchanged_frame_writes_nothing_but_the_bell() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        let fb = FrameBuffer::new(4, 3);
        renderer.draw(&fb, false).unwrap();
        let full_len = renderer.writer().len();
        renderer.draw(&fb, false).unwrap();
        assert_eq!(renderer.writer().len(), full_len);
    }
}
