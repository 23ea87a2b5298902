//! RNG module - deterministic piece selection
//!
//! Pieces are drawn uniformly from the seven kinds, independently of each
//! other (no bag). A small LCG keeps games reproducible from a seed, which is
//! what the tests and the `DUEL_TETRIS_SEED` override rely on.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    seed: u32,
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { seed, state }
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
        // High bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Uniformly random piece kind
    pub fn next_kind(&mut self) -> PieceKind {
        let id = self.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[id]
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
