//! Initial routine set for a new game.

use std::rc::Rc;

use crate::frame::Frame;
use crate::routines::{GarbageSpawner, InfoPanel, LevelClock, ObstacleOverlay, Spaceship, Star};
use crate::scheduler::Scheduler;
use crate::world::World;

/// Pre-loaded sprites the routines draw with.
#[derive(Debug, Clone)]
pub struct Sprites {
    /// Spaceship animation frames, cycled on every redraw.
    pub rocket: Vec<Rc<Frame>>,
    /// Garbage sprites, one picked at random per spawn.
    pub garbage: Vec<Rc<Frame>>,
    pub game_over: Rc<Frame>,
}

/// Populate `scheduler` with the sky, the info panel, the spaceship, the
/// garbage spawner and the year clock for a `rows` x `cols` grid.
pub fn launch(
    scheduler: &mut Scheduler,
    world: &mut World,
    sprites: &Sprites,
    rows: u16,
    cols: u16,
) {
    for _ in 0..world.config.star_count {
        scheduler.spawn(Star::random(&mut world.rng, rows, cols));
    }
    scheduler.spawn(InfoPanel::new());

    let ship = Spaceship::new(
        sprites.rocket.clone(),
        Rc::clone(&sprites.game_over),
        (f64::from(rows) / 2.0).round(),
        (f64::from(cols) / 2.0).round(),
    )
    .with_redraw_ticks(world.config.ship_redraw_ticks);
    scheduler.spawn(ship);

    scheduler.spawn(GarbageSpawner::new(sprites.garbage.clone()));
    scheduler.spawn(LevelClock::new());

    if world.config.show_obstacles {
        scheduler.spawn(ObstacleOverlay::new());
    }

    log::info!(
        "launched {} routines on a {}x{} grid",
        scheduler.len(),
        rows,
        cols
    );
}
