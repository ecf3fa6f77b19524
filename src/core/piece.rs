//! Piece module - tetromino shapes and their literal rotation tables
//!
//! Each shape carries an ordered list of 5x5 occupancy patterns, one per
//! rotation state. The state counts are pattern-defined and uneven: symmetric
//! shapes (I, S, Z) keep two states, O keeps one, the rest keep four.
//! A pattern row is a 5-bit mask read left to right from the high bit.

use arrayvec::ArrayVec;

use crate::types::{ShapeKind, SPAWN_X, SPAWN_Y};

/// One rotation state: five rows of five cells, leftmost cell in bit 4.
pub type Pattern = [u8; 5];

const I_STATES: [Pattern; 2] = [
    [0b00000, 0b00000, 0b11110, 0b00000, 0b00000],
    [0b00000, 0b00100, 0b00100, 0b00100, 0b00100],
];

const J_STATES: [Pattern; 4] = [
    [0b00000, 0b01000, 0b01110, 0b00000, 0b00000],
    [0b00000, 0b00110, 0b00100, 0b00100, 0b00000],
    [0b00000, 0b00000, 0b01110, 0b00010, 0b00000],
    [0b00000, 0b00100, 0b00100, 0b01100, 0b00000],
];

const L_STATES: [Pattern; 4] = [
    [0b00000, 0b00010, 0b01110, 0b00000, 0b00000],
    [0b00000, 0b00100, 0b00100, 0b00110, 0b00000],
    [0b00000, 0b00000, 0b01110, 0b01000, 0b00000],
    [0b00000, 0b01100, 0b00100, 0b00100, 0b00000],
];

const O_STATES: [Pattern; 1] = [[0b00000, 0b00000, 0b01100, 0b01100, 0b00000]];

const S_STATES: [Pattern; 2] = [
    [0b00000, 0b00000, 0b00110, 0b01100, 0b00000],
    [0b00000, 0b00100, 0b00110, 0b00010, 0b00000],
];

const T_STATES: [Pattern; 4] = [
    [0b00000, 0b00100, 0b01110, 0b00000, 0b00000],
    [0b00000, 0b00100, 0b00110, 0b00100, 0b00000],
    [0b00000, 0b00000, 0b01110, 0b00100, 0b00000],
    [0b00000, 0b00100, 0b01100, 0b00100, 0b00000],
];

const Z_STATES: [Pattern; 2] = [
    [0b00000, 0b00000, 0b01100, 0b00110, 0b00000],
    [0b00000, 0b00010, 0b00110, 0b00100, 0b00000],
];

/// Rotation states for a shape, in clockwise order.
pub fn rotation_states(kind: ShapeKind) -> &'static [Pattern] {
    match kind {
        ShapeKind::I => &I_STATES,
        ShapeKind::J => &J_STATES,
        ShapeKind::L => &L_STATES,
        ShapeKind::O => &O_STATES,
        ShapeKind::S => &S_STATES,
        ShapeKind::T => &T_STATES,
        ShapeKind::Z => &Z_STATES,
    }
}

/// A tetromino instance: shape identity, grid anchor, and rotation index.
///
/// The anchor is the top-left of the 5x5 pattern box. Occupied cells are
/// recomputed from the pattern on every call, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: ShapeKind,
    pub x: i8,
    pub y: i8,
    pub rotation: u8,
}

impl Tetromino {
    /// Create a new tetromino at the spawn anchor
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            x: SPAWN_X,
            y: SPAWN_Y,
            rotation: 0,
        }
    }

    /// Number of rotation states this shape defines.
    pub fn rotation_count(&self) -> u8 {
        rotation_states(self.kind).len() as u8
    }

    /// The active 5x5 pattern.
    pub fn pattern(&self) -> &'static Pattern {
        &rotation_states(self.kind)[self.rotation as usize]
    }

    /// Step the rotation index, wrapping at the shape's state count.
    /// Validation against the grid is the engine's job, not the piece's.
    pub fn rotate(&mut self, clockwise: bool) {
        let count = self.rotation_count();
        self.rotation = if clockwise {
            (self.rotation + 1) % count
        } else {
            (self.rotation + count - 1) % count
        };
    }

    /// Absolute grid coordinates of the four occupied cells.
    pub fn blocks(&self) -> ArrayVec<(i8, i8), 4> {
        let mut blocks = ArrayVec::new();
        for (dy, row) in self.pattern().iter().enumerate() {
            for dx in 0..5u8 {
                if row & (0b10000 >> dx) != 0 {
                    blocks.push((self.x + dx as i8, self.y + dy as i8));
                }
            }
        }
        blocks
    }
}
