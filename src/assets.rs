//! Sprite assets.
//!
//! Default sprites are compiled into the binary. A directory may override any
//! of them with a same-named `.txt` file.

use std::fs;
use std::path::Path;
use std::rc::Rc;

use anyhow::{ensure, Context, Result};

use crate::core::{Frame, Sprites};

pub const ROCKET_FRAMES: [(&str, &str); 2] = [
    ("rocket_frame_1", include_str!("../assets/sprites/rocket_frame_1.txt")),
    ("rocket_frame_2", include_str!("../assets/sprites/rocket_frame_2.txt")),
];

pub const GARBAGE_FRAMES: [(&str, &str); 3] = [
    ("trash_large", include_str!("../assets/sprites/trash_large.txt")),
    ("trash_small", include_str!("../assets/sprites/trash_small.txt")),
    ("trash_xl", include_str!("../assets/sprites/trash_xl.txt")),
];

pub const GAME_OVER: (&str, &str) = ("game_over", include_str!("../assets/sprites/game_over.txt"));

/// Parse one sprite, rejecting text with no visible extent.
pub fn parse_sprite(name: &str, text: &str) -> Result<Rc<Frame>> {
    let frame = Frame::new(text);
    ensure!(!frame.is_empty(), "sprite {} has no rows or no columns", name);
    Ok(Rc::new(frame))
}

fn load_one(dir: Option<&Path>, name: &str, embedded: &str) -> Result<Rc<Frame>> {
    if let Some(dir) = dir {
        let path = dir.join(format!("{}.txt", name));
        if path.is_file() {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("failed to read sprite {}", path.display()))?;
            log::info!("sprite {} loaded from {}", name, path.display());
            return parse_sprite(name, &text);
        }
    }
    parse_sprite(name, embedded)
}

/// Load every sprite, preferring files from `dir` when given.
pub fn load_sprites(dir: Option<&Path>) -> Result<Sprites> {
    let rocket = ROCKET_FRAMES
        .iter()
        .map(|(name, text)| load_one(dir, name, text))
        .collect::<Result<Vec<_>>>()?;
    let garbage = GARBAGE_FRAMES
        .iter()
        .map(|(name, text)| load_one(dir, name, text))
        .collect::<Result<Vec<_>>>()?;
    let game_over = load_one(dir, GAME_OVER.0, GAME_OVER.1)?;
    Ok(Sprites {
        rocket,
        garbage,
        game_over,
    })
}
