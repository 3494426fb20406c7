//! RNG module - 7-bag random piece generation
//!
//! Each bag contains one of each piece (I, O, T, S, Z, J, L), shuffled with a
//! uniform Fisher-Yates permutation. Draws consume the bag from the front; the
//! moment it runs empty a freshly shuffled bag replaces it, so [`RandomizerBag::peek`]
//! always has a head to report.
//!
//! The generator is owned by the bag. Seed it for reproducible sequences
//! (tests, replays) or use [`RandomizerBag::from_entropy`] for live play.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct RandomizerBag {
    /// Current bag of pieces
    bag: [PieceKind; 7],
    /// Index of the next piece to hand out
    bag_index: usize,
    rng: StdRng,
}

impl RandomizerBag {
    /// Create a bag whose whole sequence is determined by `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a bag seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut bag = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng,
        };
        bag.refill();
        bag
    }

    /// Generate a new shuffled bag
    fn refill(&mut self) {
        self.bag = PieceKind::ALL;
        self.bag.shuffle(&mut self.rng);
        self.bag_index = 0;
    }

    /// Piece the next [`draw`](Self::draw) will return
    pub fn peek(&self) -> PieceKind {
        self.bag[self.bag_index]
    }

    /// Take the head of the bag, refilling as soon as it empties
    pub fn draw(&mut self) -> PieceKind {
        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        if self.bag_index >= self.bag.len() {
            self.refill();
        }
        piece
    }

    /// Unconsumed pieces of the current bag, head first (never empty)
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }

    /// Derive a seed for a successor bag from this bag's generator.
    ///
    /// A session seeded once stays reproducible across resets.
    pub fn reseed(&mut self) -> u64 {
        self.rng.gen()
    }
}

impl Iterator for RandomizerBag {
    type Item = PieceKind;

    fn next(&mut self) -> Option<PieceKind> {
        Some(self.draw())
    }
}

impl Default for RandomizerBag {
    fn default() -> Self {
        Self::new(1)
    }
}
