//! Twinkling star.

use crate::frame::put_glyph;
use crate::rng::SimpleRng;
use crate::scheduler::{Context, Flow, Routine};
use crate::types::{
    Intensity, STAR_BOLD_TICKS, STAR_DIM_TICKS, STAR_FALL_TICKS, STAR_GLYPHS,
    STAR_MAX_OFFSET_TICKS, STAR_RISE_TICKS,
};

/// Phase a star enters on its next resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarPhase {
    Waiting,
    Dim,
    Rising,
    Bold,
    Falling,
}

impl StarPhase {
    fn next(self) -> Self {
        match self {
            StarPhase::Waiting => StarPhase::Dim,
            StarPhase::Dim => StarPhase::Rising,
            StarPhase::Rising => StarPhase::Bold,
            StarPhase::Bold => StarPhase::Falling,
            StarPhase::Falling => StarPhase::Waiting,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Star {
    row: u16,
    col: u16,
    glyph: char,
    offset: u32,
    phase: StarPhase,
    cycles: u64,
}

impl Star {
    pub fn new(row: u16, col: u16, glyph: char, offset: u32) -> Self {
        Self {
            row,
            col,
            glyph,
            offset,
            phase: StarPhase::Waiting,
            cycles: 0,
        }
    }

    /// Random star inside the sky area of a `rows` x `cols` grid.
    pub fn random(rng: &mut SimpleRng, rows: u16, cols: u16) -> Self {
        let row = rng.range_inclusive(1, i64::from(rows) - 4).max(0) as u16;
        let col = rng.range_inclusive(1, i64::from(cols) - 2).max(0) as u16;
        let glyph = rng.choose(&STAR_GLYPHS).copied().unwrap_or('*');
        let offset = rng.range_inclusive(0, i64::from(STAR_MAX_OFFSET_TICKS)) as u32;
        Self::new(row, col, glyph, offset)
    }

    pub fn position(&self) -> (u16, u16) {
        (self.row, self.col)
    }

    pub fn phase(&self) -> StarPhase {
        self.phase
    }

    /// Number of times the star reached its last lit phase.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Ticks of one full twinkle, initial wait included.
    pub fn period(&self) -> u32 {
        self.offset + STAR_DIM_TICKS + STAR_RISE_TICKS + STAR_BOLD_TICKS + STAR_FALL_TICKS
    }
}

impl Routine for Star {
    fn resume(&mut self, ctx: &mut Context<'_>) -> Flow {
        loop {
            let phase = self.phase;
            self.phase = phase.next();
            let (intensity, ticks) = match phase {
                StarPhase::Waiting => (None, self.offset),
                StarPhase::Dim => (Some(Intensity::Dim), STAR_DIM_TICKS),
                StarPhase::Rising => (Some(Intensity::Normal), STAR_RISE_TICKS),
                StarPhase::Bold => (Some(Intensity::Bold), STAR_BOLD_TICKS),
                StarPhase::Falling => {
                    self.cycles += 1;
                    (Some(Intensity::Normal), STAR_FALL_TICKS)
                }
            };
            if let Some(intensity) = intensity {
                put_glyph(
                    ctx.surface,
                    f64::from(self.row),
                    f64::from(self.col),
                    self.glyph,
                    intensity,
                );
            }
            if ticks > 0 {
                return Flow::Suspend(ticks);
            }
        }
    }

    fn name(&self) -> &'static str {
        "star"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routines::testing::Bench;
    use crate::surface::NoInput;

    #[test]
    fn star_walks_through_intensities() {
        let mut bench = Bench::new(10, 10);
        let mut star = Star::new(2, 3, '+', 4);

        assert_eq!(bench.resume(&mut star, &mut NoInput), Flow::Suspend(4));
        assert_eq!(bench.surface.glyph(2, 3), ' ');

        let expected = [
            (Intensity::Dim, STAR_DIM_TICKS),
            (Intensity::Normal, STAR_RISE_TICKS),
            (Intensity::Bold, STAR_BOLD_TICKS),
            (Intensity::Normal, STAR_FALL_TICKS),
        ];
        for (intensity, ticks) in expected {
            assert_eq!(bench.resume(&mut star, &mut NoInput), Flow::Suspend(ticks));
            assert_eq!(bench.surface.glyph(2, 3), '+');
            assert_eq!(bench.surface.intensity(2, 3), intensity);
        }
        assert_eq!(star.cycles(), 1);
        assert_eq!(star.phase(), StarPhase::Waiting);
        assert_eq!(star.period(), 35);
    }

    #[test]
    fn zero_offset_goes_straight_to_dim() {
        let mut bench = Bench::new(10, 10);
        let mut star = Star::new(1, 1, '*', 0);
        assert_eq!(
            bench.resume(&mut star, &mut NoInput),
            Flow::Suspend(STAR_DIM_TICKS)
        );
        assert_eq!(bench.surface.intensity(1, 1), Intensity::Dim);
    }

    #[test]
    fn random_stars_stay_in_the_sky() {
        let mut rng = SimpleRng::new(3);
        for _ in 0..500 {
            let star = Star::random(&mut rng, 40, 80);
            let (row, col) = star.position();
            assert!((1..=36).contains(&row));
            assert!((1..=78).contains(&col));
            assert!(STAR_GLYPHS.contains(&star.glyph));
            assert!(star.offset <= STAR_MAX_OFFSET_TICKS);
        }
    }
}
