//! Library entry point.
//!
//! Integration tests under `tests/` compile as separate crates, so the game
//! is a library with a thin `game::run()` composition root.

pub mod game;
pub mod common;
pub mod plugins;
