//! Game configuration.
//!
//! Defaults come from [`crate::types`]; every value can be overridden with a
//! `SPACE_GARBAGE_*` environment variable. Values that fail to parse are
//! ignored.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::types::{
    FIRE_UNLOCK_YEAR, GARBAGE_SPEED, LEVEL_TICKS, SHIP_REDRAW_TICKS, STAR_COUNT, START_YEAR,
    TICK_MS,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub tick_ms: u64,
    pub star_count: usize,
    pub start_year: u32,
    pub fire_unlock_year: u32,
    pub level_ticks: u32,
    pub ship_redraw_ticks: u32,
    pub garbage_speed: f64,
    pub seed: Option<u32>,
    pub show_obstacles: bool,
    pub sprites_dir: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            star_count: STAR_COUNT,
            start_year: START_YEAR,
            fire_unlock_year: FIRE_UNLOCK_YEAR,
            level_ticks: LEVEL_TICKS,
            ship_redraw_ticks: SHIP_REDRAW_TICKS,
            garbage_speed: GARBAGE_SPEED,
            seed: None,
            show_obstacles: false,
            sprites_dir: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).map(|v| v.trim().to_string());

        Self {
            tick_ms: parsed("SPACE_GARBAGE_TICK_MS")
                .and_then(|s| s.parse().ok())
                .filter(|&ms| ms > 0)
                .unwrap_or(defaults.tick_ms),
            star_count: parsed("SPACE_GARBAGE_STARS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.star_count),
            start_year: parsed("SPACE_GARBAGE_START_YEAR")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.start_year),
            fire_unlock_year: parsed("SPACE_GARBAGE_FIRE_YEAR")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.fire_unlock_year),
            level_ticks: parsed("SPACE_GARBAGE_LEVEL_TICKS")
                .and_then(|s| s.parse().ok())
                .filter(|&t| t > 0)
                .unwrap_or(defaults.level_ticks),
            ship_redraw_ticks: defaults.ship_redraw_ticks,
            garbage_speed: parsed("SPACE_GARBAGE_GARBAGE_SPEED")
                .and_then(|s| s.parse().ok())
                .filter(|&v: &f64| v > 0.0 && v.is_finite())
                .unwrap_or(defaults.garbage_speed),
            seed: parsed("SPACE_GARBAGE_SEED").and_then(|s| s.parse().ok()),
            show_obstacles: parsed("SPACE_GARBAGE_SHOW_OBSTACLES")
                .map(|v| v == "1" || v.to_lowercase() == "true")
                .unwrap_or(false),
            sprites_dir: parsed("SPACE_GARBAGE_SPRITES_DIR")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            log_path: parsed("SPACE_GARBAGE_LOG_PATH")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
