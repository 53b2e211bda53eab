//! Non-blocking keyboard polling.
//!
//! Terminals deliver key presses (and auto-repeats) but rarely key releases,
//! so the state reported by one poll is built only from the events that
//! arrived since the previous poll. Events read by
//! [`InputPoll::quit_requested`] are kept for the next poll.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

use crate::core::InputPoll;
use crate::map::{handle_key_event, KeyCommand};
use crate::types::Controls;

/// Key state accumulated between two polls.
///
/// The last direction seen on each axis wins and fire stays set once any
/// command asked for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyLatch {
    row_delta: i8,
    col_delta: i8,
    fire: bool,
    quit: bool,
}

impl KeyLatch {
    pub fn apply(&mut self, command: KeyCommand) {
        match command {
            KeyCommand::Up => self.row_delta = -1,
            KeyCommand::Down => self.row_delta = 1,
            KeyCommand::Left => self.col_delta = -1,
            KeyCommand::Right => self.col_delta = 1,
            KeyCommand::Fire => self.fire = true,
            KeyCommand::Quit => self.quit = true,
        }
    }

    /// Controls gathered so far. Directions and fire are reset; quit stays.
    pub fn take(&mut self) -> Controls {
        let controls = Controls::new(self.row_delta, self.col_delta, self.fire);
        *self = Self {
            quit: self.quit,
            ..Self::default()
        };
        controls
    }

    pub fn quit(&self) -> bool {
        self.quit
    }
}

/// [`InputPoll`] backed by crossterm's event queue.
#[derive(Debug, Default)]
pub struct KeyboardPoll {
    latch: KeyLatch,
}

impl KeyboardPoll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold key events into the pending state.
    pub fn feed(&mut self, keys: impl IntoIterator<Item = KeyEvent>) {
        for command in keys.into_iter().filter_map(handle_key_event) {
            self.latch.apply(command);
        }
    }

    fn drain(&mut self) {
        self.feed(std::iter::from_fn(read_pending_key));
    }

    fn take(&mut self) -> Controls {
        self.latch.take()
    }
}

/// Next queued key event, skipping other events. `None` once the queue is empty.
fn read_pending_key() -> Option<KeyEvent> {
    loop {
        match event::poll(Duration::ZERO) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(err) => {
                log::warn!("keyboard poll failed: {}", err);
                return None;
            }
        }
        match event::read() {
            Ok(Event::Key(key)) => return Some(key),
            Ok(_) => continue,
            Err(err) => {
                log::warn!("keyboard read failed: {}", err);
                return None;
            }
        }
    }
}

impl InputPoll for KeyboardPoll {
    fn poll(&mut self) -> Controls {
        self.drain();
        self.take()
    }

    fn quit_requested(&mut self) -> bool {
        if !self.latch.quit() {
            self.drain();
        }
        self.latch.quit()
    }
}
