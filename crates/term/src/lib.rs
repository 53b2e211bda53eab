//! Terminal rendering for the game.
//!
//! Routines draw into a [`FrameBuffer`]; once per tick the scheduler calls
//! [`Surface::refresh`](space_garbage_core::Surface::refresh) and the
//! [`TerminalRenderer`] writes the cells that changed since the previous
//! tick.

pub mod fb;
pub mod renderer;
pub mod surface;

pub use space_garbage_core as core;
pub use space_garbage_types as types;

pub use fb::{Cell, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface::TerminalSurface;
