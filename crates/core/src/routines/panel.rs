//! Info panel at the bottom of the screen: current year and its headline.

use crate::frame::{put_glyph, Frame};
use crate::scheduler::{Context, Flow, Routine};
use crate::surface::Surface;
use crate::types::{Intensity, PANEL_ROWS};

#[derive(Debug, Clone, Default)]
pub struct InfoPanel {
    phrase: Option<String>,
    label: Option<(f64, Frame)>,
}

impl InfoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text the panel shows for `year`, given the last known headline.
    pub fn label_for(year: u32, phrase: Option<&str>) -> String {
        match phrase {
            Some(phrase) => format!("{} year - {}", year, phrase),
            None => format!("{} year", year),
        }
    }

    fn draw_border(surface: &mut dyn Surface, top: u16, rows: u16, cols: u16) {
        let bottom = rows.saturating_sub(1);
        let right = cols.saturating_sub(1);
        for col in 0..cols {
            let glyph = if col == 0 || col == right { '+' } else { '-' };
            put_glyph(surface, f64::from(top), f64::from(col), glyph, Intensity::Normal);
            put_glyph(surface, f64::from(bottom), f64::from(col), glyph, Intensity::Normal);
        }
        for row in top + 1..bottom {
            put_glyph(surface, f64::from(row), 0.0, '|', Intensity::Normal);
            put_glyph(surface, f64::from(row), f64::from(right), '|', Intensity::Normal);
        }
    }
}

impl Routine for InfoPanel {
    fn resume(&mut self, ctx: &mut Context<'_>) -> Flow {
        let (rows, cols) = ctx.surface.bounds();
        let top = rows.saturating_sub(PANEL_ROWS);
        Self::draw_border(ctx.surface, top, rows, cols);

        let year = ctx.world.year();
        if let Some(phrase) = ctx.world.scenario.phrase(year) {
            self.phrase = Some(phrase.to_string());
        }
        let inner = usize::from(cols.saturating_sub(2));
        let text: String = Self::label_for(year, self.phrase.as_deref())
            .chars()
            .take(inner)
            .collect();
        let label = Frame::new(&text);
        let text_row = f64::from(top + 1);

        if let Some((col, previous)) = &self.label {
            if *previous != label {
                previous.erase(ctx.surface, text_row, *col);
            }
        }

        let width = label.columns() as i64;
        let last_start = (i64::from(cols) - 1 - width).max(1);
        let col = (i64::from(cols) / 2 - (width + 1) / 2).clamp(1, last_start) as f64;
        label.draw(ctx.surface, text_row, col);
        self.label = Some((col, label));
        Flow::Suspend(1)
    }

    fn name(&self) -> &'static str {
        "info-panel"
    }
}
