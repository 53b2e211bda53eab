//! Year counter clock.

use crate::scheduler::{Context, Flow, Routine};

/// Advances the world year by one every `level_ticks` ticks.
#[derive(Debug, Clone, Default)]
pub struct LevelClock {
    armed: bool,
}

impl LevelClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Routine for LevelClock {
    fn resume(&mut self, ctx: &mut Context<'_>) -> Flow {
        if self.armed {
            let year = ctx.world.advance_year();
            log::info!("year {}", year);
        }
        self.armed = true;
        Flow::Suspend(ctx.world.config.level_ticks.max(1))
    }

    fn name(&self) -> &'static str {
        "level-clock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routines::testing::Bench;
    use crate::surface::NoInput;

    #[test]
    fn first_resume_only_arms_the_clock() {
        let mut bench = Bench::new(10, 10);
        let start = bench.world.year();
        let mut clock = LevelClock::new();
        assert_eq!(
            bench.resume(&mut clock, &mut NoInput),
            Flow::Suspend(bench.world.config.level_ticks)
        );
        assert_eq!(bench.world.year(), start);
        bench.resume(&mut clock, &mut NoInput);
        bench.resume(&mut clock, &mut NoInput);
        assert_eq!(bench.world.year(), start + 2);
    }
}
