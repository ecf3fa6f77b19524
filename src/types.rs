//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid dimensions. Row 0 is the resting edge (where pieces accumulate),
/// row `GRID_HEIGHT - 1` is the arrival edge (where pieces spawn from).
pub const GRID_WIDTH: i8 = 10;
pub const GRID_HEIGHT: i8 = 20;

/// Spawn anchor for new pieces (top-left of the 5x5 pattern box).
pub const SPAWN_X: i8 = GRID_WIDTH / 2 - 2;
pub const SPAWN_Y: i8 = GRID_HEIGHT - 5;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u64 = 16;
pub const BASE_DROP_INTERVAL_MS: u64 = 1000;
pub const DROP_INTERVAL_FLOOR_MS: u64 = 100;
pub const LEVEL_SPEEDUP_MS: u64 = 100;

/// Level increases every this many cleared lines.
pub const LINES_PER_LEVEL: u32 = 10;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven canonical tetromino shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    /// All shapes, in the order random sources index into.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Display color for this shape.
    pub const fn color(self) -> Rgb {
        match self {
            ShapeKind::I => Rgb::new(0, 255, 255),
            ShapeKind::J => Rgb::new(0, 0, 255),
            ShapeKind::L => Rgb::new(255, 165, 0),
            ShapeKind::O => Rgb::new(255, 255, 0),
            ShapeKind::S => Rgb::new(0, 255, 0),
            ShapeKind::T => Rgb::new(255, 0, 255),
            ShapeKind::Z => Rgb::new(255, 0, 0),
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
            ShapeKind::O => "o",
            ShapeKind::S => "s",
            ShapeKind::T => "t",
            ShapeKind::Z => "z",
        }
    }
}

/// Discrete intents the host harness feeds into the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    /// One cell toward the arrival edge (decreasing y).
    SoftDrop,
    HardDrop,
    Rotate,
    Pause,
    /// Only honored while game over.
    Restart,
}

/// Cell on the grid (None = empty, Some = filled with the shape that locked there)
pub type Cell = Option<ShapeKind>;
