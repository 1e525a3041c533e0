//! Side-scrolling platformer: pooled projectiles and capability-gated power-ups.
//!
//! `main.rs` only calls `game::run`. Integration tests in `tests/` are separate
//! crates and build their headless app through `game::configure_headless`.

pub mod game;
pub mod common;
pub mod plugins;
