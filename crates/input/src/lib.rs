//! Terminal input module.
//!
//! Maps `crossterm` key events into [`map::KeyCommand`] values and folds
//! everything pending into the [`types::Controls`] the spaceship consumes.

pub mod keyboard;
pub mod map;

pub use space_garbage_core as core;
pub use space_garbage_types as types;

pub use keyboard::{KeyLatch, KeyboardPoll};
pub use map::{handle_key_event, should_quit, KeyCommand};
