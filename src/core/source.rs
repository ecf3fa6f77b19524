//! Shape source module - injectable randomness for piece selection
//!
//! Piece selection is uniform and independent per draw (no bag shuffling).
//! The source is a strategy injected into the engine so tests can script
//! exact shape sequences instead of relying on real randomness.

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Strategy that decides which shape spawns next.
pub trait ShapeSource {
    fn next_shape(&mut self) -> ShapeKind;
}

/// Uniform independent draws over the seven shapes.
#[derive(Debug, Clone)]
pub struct UniformSource {
    rng: SimpleRng,
}

impl UniformSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl ShapeSource for UniformSource {
    fn next_shape(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.rng.next_range(ShapeKind::ALL.len() as u32) as usize]
    }
}

/// Deterministic scripted source; cycles through the given shapes.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    shapes: Vec<ShapeKind>,
    index: usize,
}

impl SequenceSource {
    /// Panics on an empty sequence.
    pub fn new(shapes: Vec<ShapeKind>) -> Self {
        assert!(!shapes.is_empty(), "sequence source needs at least one shape");
        Self { shapes, index: 0 }
    }
}

impl ShapeSource for SequenceSource {
    fn next_shape(&mut self) -> ShapeKind {
        let shape = self.shapes[self.index % self.shapes.len()];
        self.index += 1;
        shape
    }
}
