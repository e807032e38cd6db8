//! RNG module - uniform piece selection
//!
//! Every spawn draws one of the seven kinds with equal probability,
//! independently of previous draws. There is no bag and no history.
//!
//! The generator is seeded so that a game can be replayed exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Seeded source of piece kinds
#[derive(Debug, Clone)]
pub struct PieceRng {
    rng: StdRng,
    seed: u64,
}

impl PieceRng {
    /// Create a new generator with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw the next kind, uniformly over all seven
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }

    /// Draw a value in `0..max` (used by headless drivers)
    pub fn next_below(&mut self, max: u32) -> u32 {
        self.rng.gen_range(0..max)
    }
}
