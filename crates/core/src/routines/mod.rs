//! Animation routines.
//!
//! Each routine is a small state machine implementing
//! [`Routine`](crate::scheduler::Routine). Its state enum names the
//! suspension point it is parked at, so the whole animation can be inspected
//! and driven tick by tick from tests.

pub mod explosion;
pub mod garbage;
pub mod level;
pub mod overlay;
pub mod panel;
pub mod shot;
pub mod spaceship;
pub mod spawner;
pub mod star;

pub use explosion::Explosion;
pub use garbage::Garbage;
pub use level::LevelClock;
pub use overlay::ObstacleOverlay;
pub use panel::InfoPanel;
pub use shot::Shot;
pub use spaceship::{ShipState, Spaceship};
pub use spawner::GarbageSpawner;
pub use star::{Star, StarPhase};
