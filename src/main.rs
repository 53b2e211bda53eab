//! Space Garbage runner (default binary).
//!
//! Steer the rocket through falling space garbage. Arrow keys or WASD move,
//! space fires once the plasma gun is invented, `q`/Esc quits.

use std::fs::File;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use space_garbage::assets::load_sprites;
use space_garbage::core::{launch, GameConfig, Scheduler, World};
use space_garbage::input::KeyboardPoll;
use space_garbage::term::{TerminalRenderer, TerminalSurface};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;
    let sprites = load_sprites(config.sprites_dir.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut surface = TerminalSurface::new(term, rows, cols);

    let result = run(&mut surface, config, &sprites);

    // Always try to restore terminal state.
    let _ = surface.renderer_mut().exit();
    result
}

fn run(
    surface: &mut TerminalSurface,
    config: GameConfig,
    sprites: &space_garbage::core::Sprites,
) -> Result<()> {
    let seed = config.seed.unwrap_or_else(clock_seed);
    let (rows, cols) = (surface.framebuffer().height(), surface.framebuffer().width());
    log::info!("starting on a {}x{} grid with seed {}", rows, cols, seed);

    let mut scheduler = Scheduler::new(config.tick_duration());
    let mut world = World::new(config, seed);
    launch(&mut scheduler, &mut world, sprites, rows, cols);

    let mut input = KeyboardPoll::new();
    scheduler.run_until(surface, &mut input, &mut world, |input| input.quit_requested())?;
    log::info!("quit after {} ticks in {}", scheduler.ticks(), world.year());
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Log to a file only; the terminal belongs to the game.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
