//! Core game logic - frames, obstacles, routines and the tick scheduler
//!
//! This crate contains everything that happens between two screen refreshes.
//! It has **no dependency** on a terminal: drawing goes through the
//! [`Surface`] trait and keyboard state through [`InputPoll`], which makes
//! every routine testable against an in-memory grid.
//!
//! # Module Structure
//!
//! - [`frame`]: immutable text sprites with clipped draw/erase
//! - [`obstacles`]: shared bounding boxes, point queries and hit hand-off
//! - [`routines`]: stars, spaceship, shots, garbage, explosions, panel, clock
//! - [`scheduler`]: the cooperative tick loop driving the routines
//! - [`world`]: state shared by routines (obstacles, year, RNG, config)
//! - [`physics`]: spaceship inertia
//! - [`scenario`]: year-indexed difficulty table
//! - [`config`]: `SPACE_GARBAGE_*` environment configuration
//! - [`rng`]: deterministic LCG
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use space_garbage_core::{GameConfig, NoInput, Scheduler, Star, World};
//! # use space_garbage_core::{Surface, types::Intensity};
//! # struct Blank;
//! # impl Surface for Blank {
//! #     fn bounds(&self) -> (u16, u16) { (24, 80) }
//! #     fn write_glyph(&mut self, _: u16, _: u16, _: char, _: Intensity) {}
//! #     fn refresh(&mut self) -> anyhow::Result<()> { Ok(()) }
//! # }
//!
//! let mut world = World::new(GameConfig::default(), 42);
//! let mut scheduler = Scheduler::new(Duration::ZERO);
//! scheduler.spawn(Star::new(3, 7, '*', 0));
//!
//! let mut surface = Blank;
//! for _ in 0..100 {
//!     scheduler.step(&mut surface, &mut NoInput, &mut world).unwrap();
//! }
//! assert_eq!(scheduler.len(), 1);
//! ```
//!
//! # Timing
//!
//! Every duration is a whole number of ticks. A routine resumed in tick `T`
//! that answers `Flow::Suspend(n)` is resumed next in tick `T + n`. Routines
//! spawned in tick `T` first run in tick `T + 1`.

pub mod config;
pub mod frame;
pub mod launch;
pub mod obstacles;
pub mod physics;
pub mod rng;
pub mod routines;
pub mod scenario;
pub mod scheduler;
pub mod surface;
pub mod world;

pub use space_garbage_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use frame::{put_glyph, Frame};
pub use launch::{launch, Sprites};
pub use obstacles::{Obstacle, ObstacleGuard, ObstacleId, ObstacleRegistry};
pub use physics::update_speed;
pub use rng::SimpleRng;
pub use routines::{
    Explosion, Garbage, GarbageSpawner, InfoPanel, LevelClock, ObstacleOverlay, ShipState, Shot,
    Spaceship, Star, StarPhase,
};
pub use scenario::{Scenario, SpaceRace};
pub use scheduler::{Context, Flow, Routine, Scheduler};
pub use surface::{InputPoll, NoInput, ScriptedInput, Surface};
pub use world::World;
