//! Upside-down Tetris for the terminal.
//!
//! Gravity is inverted: pieces spawn near the bottom of the well, rise one
//! row at a time, and stack against the ceiling. Completed rows clear and
//! the stack settles back toward the ceiling.
//!
//! The crate splits into a pure engine and thin terminal plumbing:
//!
//! - [`core`]: grid, pieces, shape source, scoring, and the engine state
//!   machine. Deterministic and host-agnostic; drives everything through
//!   discrete [`types::GameAction`] intents and a millisecond clock.
//! - [`term`]: framebuffer, crossterm renderer, and the snapshot view.
//! - [`input`]: key event to intent mapping.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
