//! Read-only per-frame snapshot of the engine state.
//!
//! The rendering collaborator polls this once per frame and must treat it as
//! immutable; it is plain copied data with no ties back into the engine.

use crate::core::{GameState, Tetromino};
use crate::types::{Cell, ShapeKind, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: ShapeKind,
    /// Absolute grid coordinates of the four occupied cells.
    pub blocks: [(i8, i8); 4],
}

impl From<&Tetromino> for PieceSnapshot {
    fn from(piece: &Tetromino) -> Self {
        let mut blocks = [(0, 0); 4];
        for (slot, block) in blocks.iter_mut().zip(piece.blocks()) {
            *slot = block;
        }
        Self {
            kind: piece.kind,
            blocks,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Grid contents, indexed [y][x] with y = 0 at the resting edge.
    pub grid: [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub current: PieceSnapshot,
    pub next: PieceSnapshot,
    pub score: u32,
    pub level: u32,
    pub lines_cleared: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameState {
    /// Capture the state the renderer needs for one frame.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut grid = [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
        self.board().write_rows(&mut grid);

        GameSnapshot {
            grid,
            current: self.current().into(),
            next: self.next_piece().into(),
            score: self.score(),
            level: self.level(),
            lines_cleared: self.lines_cleared(),
            paused: self.paused(),
            game_over: self.game_over(),
        }
    }
}
