//! Space Garbage (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `space_garbage::{core,input,term,types}` and owns the embedded sprites.

pub mod assets;

pub use space_garbage_core as core;
pub use space_garbage_input as input;
pub use space_garbage_term as term;
pub use space_garbage_types as types;
