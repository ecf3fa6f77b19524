//! Core module - pure game logic with no I/O dependencies
//!
//! Everything the inverted-gravity rule set needs lives here: the grid, the
//! piece tables, the shape source, scoring, and the engine state machine.

pub mod board;
pub mod game_state;
pub mod piece;
pub mod scoring;
pub mod snapshot;
pub mod source;

pub use board::Board;
pub use game_state::GameState;
pub use piece::{rotation_states, Tetromino};
pub use snapshot::{GameSnapshot, PieceSnapshot};
pub use source::{SequenceSource, ShapeSource, UniformSource};
