//! State shared between routines.
//!
//! Routines own their private state; the only things they share are the
//! obstacle registry and the year counter. Both live here, next to the RNG,
//! the difficulty table and the configuration every routine reads.

use crate::config::GameConfig;
use crate::obstacles::ObstacleRegistry;
use crate::rng::SimpleRng;
use crate::scenario::{Scenario, SpaceRace};

pub struct World {
    pub obstacles: ObstacleRegistry,
    pub rng: SimpleRng,
    pub scenario: Box<dyn Scenario>,
    pub config: GameConfig,
    year: u32,
}

impl World {
    pub fn new(config: GameConfig, seed: u32) -> Self {
        Self::with_scenario(config, seed, Box::new(SpaceRace))
    }

    pub fn with_scenario(config: GameConfig, seed: u32, scenario: Box<dyn Scenario>) -> Self {
        Self {
            obstacles: ObstacleRegistry::new(),
            rng: SimpleRng::new(seed),
            scenario,
            year: config.start_year,
            config,
        }
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    /// Move the year counter forward by one. The counter never goes back.
    pub fn advance_year(&mut self) -> u32 {
        self.year = self.year.saturating_add(1);
        self.year
    }

    pub fn fire_unlocked(&self) -> bool {
        self.year >= self.config.fire_unlock_year
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("year", &self.year)
            .field("obstacles", &self.obstacles.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_starts_from_config_and_only_moves_forward() {
        let config = GameConfig {
            start_year: 2019,
            ..GameConfig::default()
        };
        let mut world = World::new(config, 1);
        assert_eq!(world.year(), 2019);
        assert!(!world.fire_unlocked());
        assert_eq!(world.advance_year(), 2020);
        assert!(world.fire_unlocked());
    }
}
